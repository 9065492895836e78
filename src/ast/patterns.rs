use std::fmt::Display;

use crate::Span;

/// Binder patterns for declarations and method parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Binds the value to a name.
    Bind(BindPattern),
    /// Matches anything and binds nothing.
    Ignore(IgnorePattern),
}

impl Pattern {
    pub fn span(&self) -> &Span {
        match self {
            Pattern::Bind(pattern) => &pattern.span,
            Pattern::Ignore(pattern) => &pattern.span,
        }
    }

    /// The name bound by this pattern, if any.
    pub fn bound_name(&self) -> Option<&str> {
        match self {
            Pattern::Bind(pattern) => Some(&pattern.name),
            Pattern::Ignore(_) => None,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Bind(pattern) => write!(f, "{}", pattern.name),
            Pattern::Ignore(_) => write!(f, "nothing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindPattern {
    name: String,
    span: Span,
}

impl BindPattern {
    pub fn new(name: String, span: Span) -> Self {
        BindPattern { name, span }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IgnorePattern {
    span: Span,
}

impl IgnorePattern {
    pub fn new(span: Span) -> Self {
        IgnorePattern { span }
    }
}
