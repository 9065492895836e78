//! Unit tests for the syntax tree.
//!
//! Trees are built by hand here so the node model can be checked without
//! the parser.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{Position, Span};

use super::{
    ast::{Node, NodeType},
    expressions::{
        AndExpr, BinaryExpr, CallExpr, ErrorExpr, Field, NameExpr, NumberExpr, Operator,
        RecordExpr, StringExpr,
    },
    patterns::{BindPattern, IgnorePattern, Pattern},
    statements::{DefMethodStmt, DoStmt, IfStmt, ReturnStmt, SequenceStmt, VarDeclStmt},
};

fn span(start: u32, end: u32) -> Span {
    let file = Arc::new("test.mag".to_string());
    Span {
        start: Position(start, Arc::clone(&file)),
        end: Position(end, file),
    }
}

fn name(name: &str) -> Node {
    Node::Name(NameExpr::new(name.to_string(), span(0, 1)))
}

fn number(value: f64) -> Node {
    Node::Number(NumberExpr::new(value, span(0, 1)))
}

fn bind(name: &str) -> Option<Pattern> {
    Some(Pattern::Bind(BindPattern::new(name.to_string(), span(0, 1))))
}

fn method(left: Option<Pattern>, name: &str, right: Option<Pattern>, body: Node) -> Node {
    Node::DefMethod(DefMethodStmt::new(left, name.to_string(), right, body, span(0, 1)))
}

#[test]
fn test_method_signatures() {
    let cases = [
        (None, None, "foo"),
        (bind("a"), None, "() foo"),
        (None, bind("b"), "foo()"),
        (bind("a"), bind("b"), "() foo()"),
    ];

    for (left, right, expected) in cases {
        let Node::DefMethod(def) = method(left, "foo", right, number(1.0)) else {
            panic!("expected a method definition");
        };
        assert_eq!(def.signature(), expected);
    }
}

#[test]
fn test_call_signature_matches_definition() {
    let call = CallExpr::new(Some(name("a")), "add".to_string(), Some(name("b")), span(0, 1));
    let Node::DefMethod(def) = method(bind("a"), "add", bind("b"), number(1.0)) else {
        panic!("expected a method definition");
    };

    assert_eq!(call.signature(), def.signature());
}

#[test]
fn test_record_signature() {
    let record = RecordExpr::new(
        vec![
            Field::new("0".to_string(), number(1.0)),
            Field::new("1".to_string(), number(2.0)),
            Field::new("x".to_string(), number(3.0)),
        ],
        span(0, 1),
    );

    assert_eq!(record.signature(), "0,1,x");
}

#[test]
fn test_operator_symbols() {
    assert_eq!(Operator::Add.to_string(), "+");
    assert_eq!(Operator::NotEqual.to_string(), "!=");
    assert_eq!(Operator::GreaterEqual.symbol(), ">=");
}

#[test]
fn test_display_expressions() {
    let sum = Node::BinaryOp(BinaryExpr::new(number(1.0), Operator::Add, number(2.5), span(0, 1)));
    let both = Node::And(AndExpr::new(name("a"), sum, span(0, 1)));
    let text = Node::String(StringExpr::new("hi\n".to_string(), span(0, 1)));

    assert_eq!(both.to_string(), "(and a (+ 1 2.5))");
    assert_eq!(text.to_string(), "\"hi\\n\"");
    assert_eq!(Node::Error(ErrorExpr::new(span(0, 1))).to_string(), "<error>");
}

#[test]
fn test_display_statements() {
    let decl = Node::Variable(VarDeclStmt::new(
        false,
        Pattern::Ignore(IgnorePattern::new(span(0, 1))),
        number(1.0),
        span(0, 1),
    ));
    let ret = Node::Return(ReturnStmt::new(None, span(0, 1)));
    let branch = Node::If(IfStmt::new(name("c"), decl, Some(ret), span(0, 1)));

    assert_eq!(branch.to_string(), "(if c (val nothing 1) (return))");
}

#[test]
fn test_children_in_source_order() {
    let branch = Node::If(IfStmt::new(name("c"), name("t"), Some(name("e")), span(0, 1)));
    let names: Vec<String> = branch.children().iter().map(|node| node.to_string()).collect();

    assert_eq!(names, vec!["c", "t", "e"]);
    assert!(name("leaf").children().is_empty());
}

#[test]
fn test_method_definitions_in_source_order() {
    let inner = method(None, "inner", None, number(1.0));
    let outer = method(
        None,
        "outer",
        None,
        Node::Sequence(SequenceStmt::new(vec![inner, number(2.0)], span(0, 1))),
    );
    let module = Node::Sequence(SequenceStmt::new(
        vec![
            outer,
            Node::Do(DoStmt::new(method(bind("a"), "last", None, name("a")), span(0, 1))),
        ],
        span(0, 1),
    ));

    let methods = module.method_definitions();
    let names: Vec<&str> = methods.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["outer", "inner", "last"]);
}

#[test]
fn test_contains_errors() {
    let hole = Node::Error(ErrorExpr::new(span(0, 1)));
    let module = Node::Sequence(SequenceStmt::new(
        vec![number(1.0), Node::Do(DoStmt::new(hole, span(0, 1)))],
        span(0, 1),
    ));

    assert!(module.contains_errors());
    assert!(!number(1.0).contains_errors());
}

#[test]
fn test_into_parts_hands_over_body() {
    let Node::DefMethod(def) = method(bind("a"), "id", None, name("a")) else {
        panic!("expected a method definition");
    };
    let (left, name, right, body) = def.into_parts();

    assert_eq!(left.as_ref().and_then(|p| p.bound_name()), Some("a"));
    assert_eq!(name, "id");
    assert!(right.is_none());
    assert_eq!(body.get_node_type(), NodeType::Name);
}

#[test]
fn test_nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Node>();
}
