//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way a method registry or a REPL
//! would: source text in, a syntax tree and its diagnostics out.

use std::thread;

use pretty_assertions::assert_eq;
use syntax::{
    ast::ast::{Node, NodeType},
    errors::{
        errors::Error,
        reporter::{ErrorCollector, ErrorReporter},
    },
    format_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse, Parser,
};

const MODULE: &str = "\
// Points and their arithmetic.
def (p) x
    p get(\"x\")
end

def (a) add(b)
    val sum = a x + b x, y: a y + b y
    return sum
end

def (n) describe()
    if n < 0 then
        \"negative\"
    else if n == 0 then \"zero\" else \"positive\"
end

var origin = x: 0, y: 0
origin add(x: 1, y: 2)
";

#[test]
fn test_parse_module_end_to_end() {
    let (module, errors) = parse(MODULE.to_string(), Some("points.mag".to_string()));

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(module.get_node_type(), NodeType::Sequence);

    let Node::Sequence(sequence) = &module else {
        panic!("expected a sequence");
    };
    let kinds: Vec<NodeType> = sequence.body().iter().map(Node::get_node_type).collect();
    assert_eq!(
        kinds,
        vec![
            NodeType::DefMethod,
            NodeType::DefMethod,
            NodeType::DefMethod,
            NodeType::Variable,
            NodeType::Call,
        ]
    );
    assert!(!module.contains_errors());
}

#[test]
fn test_method_signatures_for_registry() {
    let (module, errors) = parse(MODULE.to_string(), None);
    assert!(errors.is_empty());

    let methods = module.method_definitions();
    let signatures: Vec<String> = methods.iter().map(|method| method.signature()).collect();

    assert_eq!(signatures, vec!["() x", "() add()", "() describe"]);
}

#[test]
fn test_method_bodies_render() {
    let (module, _) = parse(MODULE.to_string(), None);
    let methods = module.method_definitions();

    assert_eq!(
        methods[1].body().to_string(),
        "(seq (val sum (record 0: (+ (call a x _) (call b x _)) y: (+ (call a y _) (call b y _)))) (return sum))"
    );
    assert_eq!(
        methods[2].body().to_string(),
        "(if (< n 0) \"negative\" (if (== n 0) \"zero\" \"positive\"))"
    );
}

#[test]
fn test_registry_takes_ownership_of_bodies() {
    let (module, _) = parse("def foo() 1\ndef (a) bar 2".to_string(), None);

    let Node::Sequence(sequence) = module else {
        panic!("expected a sequence");
    };

    let mut registry = vec![];
    for statement in sequence.body().iter().cloned() {
        if let Node::DefMethod(method) = statement {
            let signature = method.signature();
            let (_, _, _, body) = method.into_parts();
            registry.push((signature, body));
        }
    }

    assert_eq!(registry.len(), 2);
    assert_eq!(registry[0].0, "foo");
    assert_eq!(registry[1].0, "() bar");
    assert_eq!(registry[1].1.to_string(), "2");
}

#[test]
fn test_format_reported_error() {
    let source = "var a = 1\nvar b = )\n";
    let (_, errors) = parse(source.to_string(), Some("broken.mag".to_string()));

    assert_eq!(errors.len(), 1);

    let rendered = format_error(&errors[0], source);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token `)`)");
    assert_eq!(lines[1], "-> broken.mag");
    assert_eq!(lines[3], "2 | var b = )");
    assert_eq!(lines[4], "  | --------^");
}

#[test]
fn test_parse_modules_concurrently() {
    let sources = vec![
        "def (a) plus(b) a + b".to_string(),
        "1 + 2 * 3".to_string(),
        ")\n1".to_string(),
        MODULE.to_string(),
    ];

    let handles: Vec<_> = sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| thread::spawn(move || parse(source, Some(format!("module{}.mag", i)))))
        .collect();

    let results: Vec<(Node, Vec<Error>)> = handles
        .into_iter()
        .map(|handle| handle.join().expect("parser thread panicked"))
        .collect();

    assert_eq!(results[0].0.to_string(), "(def a plus b (+ a b))");
    assert_eq!(results[1].0.to_string(), "(+ 1 (* 2 3))");
    assert_eq!(results[2].1.len(), 1);
    assert_eq!(results[2].1[0].get_position().1.as_str(), "module2.mag");
    assert!(results[3].1.is_empty());
}

/// A reporter that only keeps the messages, as a REPL would print them.
#[derive(Default)]
struct MessageLog {
    messages: Vec<String>,
}

impl ErrorReporter for MessageLog {
    fn report(&mut self, error: Error) {
        self.messages.push(error.get_tip().to_string());
    }
}

#[test]
fn test_custom_error_reporter() {
    let mut log = MessageLog::default();

    let module = {
        let mut parser = Parser::new(Lexer::new("if a b\n1".to_string(), None), &mut log);
        parser.parse_module()
    };

    assert!(!log.messages.is_empty());
    assert!(log.messages[0].starts_with("Expect 'then' after 'if' condition."));
    assert_eq!(module.get_node_type(), NodeType::If);
}

#[test]
fn test_collector_sees_every_error() {
    let mut collector = ErrorCollector::new();

    {
        let mut parser = Parser::new(Lexer::new(")\n]\n1 +".to_string(), None), &mut collector);
        parser.parse_module();
        assert!(parser.look_ahead(TokenKind::EOF));
    }

    assert_eq!(collector.count(), 3);
}
