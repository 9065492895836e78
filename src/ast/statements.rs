use crate::Span;

use super::{ast::Node, expressions::signature, patterns::Pattern};

/// `def (left) name(right) body`
#[derive(Debug, Clone, PartialEq)]
pub struct DefMethodStmt {
    left_param: Option<Pattern>,
    name: String,
    right_param: Option<Pattern>,
    body: Box<Node>,
    span: Span,
}

impl DefMethodStmt {
    pub fn new(
        left_param: Option<Pattern>,
        name: String,
        right_param: Option<Pattern>,
        body: Node,
        span: Span,
    ) -> Self {
        DefMethodStmt {
            left_param,
            name,
            right_param,
            body: Box::new(body),
            span,
        }
    }

    pub fn left_param(&self) -> Option<&Pattern> {
        self.left_param.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right_param(&self) -> Option<&Pattern> {
        self.right_param.as_ref()
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The signature the method is registered under. Calls with the same
    /// argument shape produce the same string.
    pub fn signature(&self) -> String {
        signature(self.left_param.is_some(), &self.name, self.right_param.is_some())
    }

    /// Consumes the definition, handing its parts to a method registry.
    pub fn into_parts(self) -> (Option<Pattern>, String, Option<Pattern>, Node) {
        (self.left_param, self.name, self.right_param, *self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoStmt {
    body: Box<Node>,
    span: Span,
}

impl DoStmt {
    pub fn new(body: Node, span: Span) -> Self {
        DoStmt { body: Box::new(body), span }
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    condition: Box<Node>,
    then_arm: Box<Node>,
    else_arm: Option<Box<Node>>,
    span: Span,
}

impl IfStmt {
    pub fn new(condition: Node, then_arm: Node, else_arm: Option<Node>, span: Span) -> Self {
        IfStmt {
            condition: Box::new(condition),
            then_arm: Box::new(then_arm),
            else_arm: else_arm.map(Box::new),
            span,
        }
    }

    pub fn condition(&self) -> &Node {
        &self.condition
    }

    pub fn then_arm(&self) -> &Node {
        &self.then_arm
    }

    pub fn else_arm(&self) -> Option<&Node> {
        self.else_arm.as_deref()
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    value: Option<Box<Node>>,
    span: Span,
}

impl ReturnStmt {
    pub fn new(value: Option<Node>, span: Span) -> Self {
        ReturnStmt { value: value.map(Box::new), span }
    }

    pub fn value(&self) -> Option<&Node> {
        self.value.as_deref()
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Two or more statements evaluated in order. Only an empty block or module
/// produces a sequence with fewer.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStmt {
    body: Vec<Node>,
    span: Span,
}

impl SequenceStmt {
    pub fn new(body: Vec<Node>, span: Span) -> Self {
        SequenceStmt { body, span }
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// `var pattern = value` or `val pattern = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    is_mutable: bool,
    pattern: Pattern,
    value: Box<Node>,
    span: Span,
}

impl VarDeclStmt {
    pub fn new(is_mutable: bool, pattern: Pattern, value: Node, span: Span) -> Self {
        VarDeclStmt {
            is_mutable,
            pattern,
            value: Box::new(value),
            span,
        }
    }

    pub fn is_mutable(&self) -> bool {
        self.is_mutable
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn value(&self) -> &Node {
        &self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}
