use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Node;

/// Infix operators carried by `BinaryExpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Dash => Some(Operator::Subtract),
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            TokenKind::Percent => Some(Operator::Remainder),
            TokenKind::Equals => Some(Operator::Equal),
            TokenKind::NotEquals => Some(Operator::NotEqual),
            TokenKind::Less => Some(Operator::Less),
            TokenKind::LessEquals => Some(Operator::LessEqual),
            TokenKind::Greater => Some(Operator::Greater),
            TokenKind::GreaterEquals => Some(Operator::GreaterEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AndExpr {
    left: Box<Node>,
    right: Box<Node>,
    span: Span,
}

impl AndExpr {
    pub fn new(left: Node, right: Node, span: Span) -> Self {
        AndExpr { left: Box::new(left), right: Box::new(right), span }
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrExpr {
    left: Box<Node>,
    right: Box<Node>,
    span: Span,
}

impl OrExpr {
    pub fn new(left: Node, right: Node, span: Span) -> Self {
        OrExpr { left: Box::new(left), right: Box::new(right), span }
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    left: Box<Node>,
    operator: Operator,
    right: Box<Node>,
    span: Span,
}

impl BinaryExpr {
    pub fn new(left: Node, operator: Operator, right: Node, span: Span) -> Self {
        BinaryExpr { left: Box::new(left), operator, right: Box::new(right), span }
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    value: bool,
    span: Span,
}

impl BoolExpr {
    pub fn new(value: bool, span: Span) -> Self {
        BoolExpr { value, span }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// A method invocation: `left name(right)`.
///
/// Either argument may be absent. A call without a receiver is written
/// `name(...)`; `name()` is a call with neither argument, which keeps it
/// distinct from a bare `NameExpr`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    left: Option<Box<Node>>,
    name: String,
    right: Option<Box<Node>>,
    span: Span,
}

impl CallExpr {
    pub fn new(left: Option<Node>, name: String, right: Option<Node>, span: Span) -> Self {
        CallExpr {
            left: left.map(Box::new),
            name,
            right: right.map(Box::new),
            span,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The method signature this call dispatches on, e.g. `"() add()"`.
    pub fn signature(&self) -> String {
        signature(self.left.is_some(), &self.name, self.right.is_some())
    }
}

/// Builds a method signature from its name and argument shape.
pub(crate) fn signature(has_left: bool, name: &str, has_right: bool) -> String {
    let mut signature = String::new();
    if has_left {
        signature.push_str("() ");
    }
    signature.push_str(name);
    if has_right {
        signature.push_str("()");
    }
    signature
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameExpr {
    name: String,
    span: Span,
}

impl NameExpr {
    pub fn new(name: String, span: Span) -> Self {
        NameExpr { name, span }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotExpr {
    value: Box<Node>,
    span: Span,
}

impl NotExpr {
    pub fn new(value: Node, span: Span) -> Self {
        NotExpr { value: Box::new(value), span }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NothingExpr {
    span: Span,
}

impl NothingExpr {
    pub fn new(span: Span) -> Self {
        NothingExpr { span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    value: f64,
    span: Span,
}

impl NumberExpr {
    pub fn new(value: f64, span: Span) -> Self {
        NumberExpr { value, span }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// One labelled value of a record literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Node,
}

impl Field {
    pub fn new(name: String, value: Node) -> Self {
        Field { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// A record or tuple literal. Fields keep their syntactic order; unlabelled
/// fields are named by position (`"0"`, `"1"`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExpr {
    fields: Vec<Field>,
    span: Span,
}

impl RecordExpr {
    pub fn new(fields: Vec<Field>, span: Span) -> Self {
        RecordExpr { fields, span }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The structural signature the record type registry keys on: the field
    /// labels in order, comma separated.
    pub fn signature(&self) -> String {
        self.fields
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    value: String,
    span: Span,
}

impl StringExpr {
    pub fn new(value: String, span: Span) -> Self {
        StringExpr { value, span }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Stands in for a subtree that could not be parsed. A tree containing one
/// always comes with at least one reported error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorExpr {
    span: Span,
}

impl ErrorExpr {
    pub fn new(span: Span) -> Self {
        ErrorExpr { span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}
