use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingExpectedToken { .. } => "MissingExpectedToken",
            ErrorImpl::MalformedPattern { .. } => "MalformedPattern",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateFieldLabel { .. } => "DuplicateFieldLabel",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token `{}`", token))
            }
            ErrorImpl::MissingExpectedToken { message, found, .. } => {
                ErrorTip::Suggestion(format!("{} Found `{}`", message, found))
            }
            ErrorImpl::MalformedPattern { token } => {
                ErrorTip::Suggestion(format!("Expected pattern, found `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::DuplicateFieldLabel { label } => {
                ErrorTip::Suggestion(format!("Field `{}` is already defined in this record", label))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token {token:?}")]
    UnexpectedToken { token: String },
    #[error("{message} (expected {expected}, found {found:?})")]
    MissingExpectedToken {
        expected: TokenKind,
        found: String,
        message: String,
    },
    #[error("expected pattern, found {token:?}")]
    MalformedPattern { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("duplicate field label {label:?}")]
    DuplicateFieldLabel { label: String },
}
