use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        AndExpr, BinaryExpr, BoolExpr, CallExpr, ErrorExpr, NameExpr, NotExpr, NothingExpr,
        NumberExpr, OrExpr, RecordExpr, StringExpr,
    },
    statements::{DefMethodStmt, DoStmt, IfStmt, ReturnStmt, SequenceStmt, VarDeclStmt},
};

/// Node Types
///
/// The kinds of node in the syntax tree, without their contents.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    And,
    BinaryOp,
    Bool,
    Call,
    DefMethod,
    Do,
    Error,
    If,
    Name,
    Not,
    Nothing,
    Number,
    Or,
    Record,
    Return,
    Sequence,
    String,
    Variable,
}

/// A syntax tree node.
///
/// Every node owns its children outright, so a tree can be dropped or moved
/// (to a method registry, another thread) independently of the parser that
/// built it. Nodes are read through accessors and never change once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    And(AndExpr),
    BinaryOp(BinaryExpr),
    Bool(BoolExpr),
    Call(CallExpr),
    DefMethod(DefMethodStmt),
    Do(DoStmt),
    Error(ErrorExpr),
    If(IfStmt),
    Name(NameExpr),
    Not(NotExpr),
    Nothing(NothingExpr),
    Number(NumberExpr),
    Or(OrExpr),
    Record(RecordExpr),
    Return(ReturnStmt),
    Sequence(SequenceStmt),
    String(StringExpr),
    Variable(VarDeclStmt),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::And(_) => NodeType::And,
            Node::BinaryOp(_) => NodeType::BinaryOp,
            Node::Bool(_) => NodeType::Bool,
            Node::Call(_) => NodeType::Call,
            Node::DefMethod(_) => NodeType::DefMethod,
            Node::Do(_) => NodeType::Do,
            Node::Error(_) => NodeType::Error,
            Node::If(_) => NodeType::If,
            Node::Name(_) => NodeType::Name,
            Node::Not(_) => NodeType::Not,
            Node::Nothing(_) => NodeType::Nothing,
            Node::Number(_) => NodeType::Number,
            Node::Or(_) => NodeType::Or,
            Node::Record(_) => NodeType::Record,
            Node::Return(_) => NodeType::Return,
            Node::Sequence(_) => NodeType::Sequence,
            Node::String(_) => NodeType::String,
            Node::Variable(_) => NodeType::Variable,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Node::And(node) => node.span(),
            Node::BinaryOp(node) => node.span(),
            Node::Bool(node) => node.span(),
            Node::Call(node) => node.span(),
            Node::DefMethod(node) => node.span(),
            Node::Do(node) => node.span(),
            Node::Error(node) => node.span(),
            Node::If(node) => node.span(),
            Node::Name(node) => node.span(),
            Node::Not(node) => node.span(),
            Node::Nothing(node) => node.span(),
            Node::Number(node) => node.span(),
            Node::Or(node) => node.span(),
            Node::Record(node) => node.span(),
            Node::Return(node) => node.span(),
            Node::Sequence(node) => node.span(),
            Node::String(node) => node.span(),
            Node::Variable(node) => node.span(),
        }
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::And(node) => vec![node.left(), node.right()],
            Node::Or(node) => vec![node.left(), node.right()],
            Node::BinaryOp(node) => vec![node.left(), node.right()],
            Node::Call(node) => node.left().into_iter().chain(node.right()).collect(),
            Node::DefMethod(node) => vec![node.body()],
            Node::Do(node) => vec![node.body()],
            Node::If(node) => {
                let mut children = vec![node.condition(), node.then_arm()];
                children.extend(node.else_arm());
                children
            }
            Node::Not(node) => vec![node.value()],
            Node::Record(node) => node.fields().iter().map(|field| field.value()).collect(),
            Node::Return(node) => node.value().into_iter().collect(),
            Node::Sequence(node) => node.body().iter().collect(),
            Node::Variable(node) => vec![node.value()],
            Node::Bool(_)
            | Node::Error(_)
            | Node::Name(_)
            | Node::Nothing(_)
            | Node::Number(_)
            | Node::String(_) => vec![],
        }
    }

    /// Every method definition in the tree, outermost first, in source order.
    pub fn method_definitions(&self) -> Vec<&DefMethodStmt> {
        let mut methods = vec![];
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if let Node::DefMethod(method) = node {
                methods.push(method);
            }
            stack.extend(node.children().into_iter().rev());
        }

        methods
    }

    /// Whether any part of the tree is a hole left by a syntax error.
    pub fn contains_errors(&self) -> bool {
        match self {
            Node::Error(_) => true,
            node => node.children().into_iter().any(Node::contains_errors),
        }
    }
}

fn write_optional(f: &mut std::fmt::Formatter<'_>, value: Option<&dyn Display>) -> std::fmt::Result {
    match value {
        Some(value) => write!(f, " {}", value),
        None => write!(f, " _"),
    }
}

/// Renders the tree as an S-expression, e.g. `(+ 1 (* 2 3))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::And(node) => write!(f, "(and {} {})", node.left(), node.right()),
            Node::Or(node) => write!(f, "(or {} {})", node.left(), node.right()),
            Node::BinaryOp(node) => {
                write!(f, "({} {} {})", node.operator(), node.left(), node.right())
            }
            Node::Bool(node) => write!(f, "{}", node.value()),
            Node::Call(node) => {
                write!(f, "(call")?;
                write_optional(f, node.left().map(|n| n as &dyn Display))?;
                write!(f, " {}", node.name())?;
                write_optional(f, node.right().map(|n| n as &dyn Display))?;
                write!(f, ")")
            }
            Node::DefMethod(node) => {
                write!(f, "(def")?;
                write_optional(f, node.left_param().map(|p| p as &dyn Display))?;
                write!(f, " {}", node.name())?;
                write_optional(f, node.right_param().map(|p| p as &dyn Display))?;
                write!(f, " {})", node.body())
            }
            Node::Do(node) => write!(f, "(do {})", node.body()),
            Node::Error(_) => write!(f, "<error>"),
            Node::If(node) => {
                write!(f, "(if {} {}", node.condition(), node.then_arm())?;
                if let Some(else_arm) = node.else_arm() {
                    write!(f, " {}", else_arm)?;
                }
                write!(f, ")")
            }
            Node::Name(node) => write!(f, "{}", node.name()),
            Node::Not(node) => write!(f, "(not {})", node.value()),
            Node::Nothing(_) => write!(f, "nothing"),
            Node::Number(node) => write!(f, "{}", node.value()),
            Node::Record(node) => {
                write!(f, "(record")?;
                for field in node.fields() {
                    write!(f, " {}: {}", field.name(), field.value())?;
                }
                write!(f, ")")
            }
            Node::Return(node) => match node.value() {
                Some(value) => write!(f, "(return {})", value),
                None => write!(f, "(return)"),
            },
            Node::Sequence(node) => {
                write!(f, "(seq")?;
                for statement in node.body() {
                    write!(f, " {}", statement)?;
                }
                write!(f, ")")
            }
            Node::String(node) => write!(f, "{:?}", node.value()),
            Node::Variable(node) => {
                let keyword = if node.is_mutable() { "var" } else { "val" };
                write!(f, "({} {} {})", keyword, node.pattern(), node.value())
            }
        }
    }
}
