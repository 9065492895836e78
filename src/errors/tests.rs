//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::errors::reporter::{ErrorCollector, ErrorReporter};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::sync::Arc;

fn position(offset: u32) -> Position {
    Position(offset, Arc::new("test.mag".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.mag");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_tip().to_string(), "Unexpected token `)`");
}

#[test]
fn test_missing_expected_token_error() {
    let error = Error::new(
        ErrorImpl::MissingExpectedToken {
            expected: TokenKind::Then,
            found: "end of file".to_string(),
            message: "Expect 'then' after 'if' condition.".to_string(),
        },
        position(7),
    );

    assert_eq!(error.get_error_name(), "MissingExpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "Expect 'then' after 'if' condition. Found `end of file`"
    );
    assert_eq!(
        error.to_string(),
        "Expect 'then' after 'if' condition. (expected Then, found \"end of file\") at test.mag:7"
    );
}

#[test]
fn test_malformed_pattern_error() {
    let error = Error::new(
        ErrorImpl::MalformedPattern {
            token: "42".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "MalformedPattern");
    assert!(matches!(error.get_kind(), ErrorImpl::MalformedPattern { .. }));
}

#[test]
fn test_duplicate_field_label_error() {
    let error = Error::new(
        ErrorImpl::DuplicateFieldLabel {
            label: "x".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "DuplicateFieldLabel");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_collector_accumulates_in_order() {
    let mut collector = ErrorCollector::new();
    assert!(!collector.has_errors());

    collector.report(Error::new(ErrorImpl::UnexpectedToken { token: "a".to_string() }, position(1)));
    collector.report(Error::new(ErrorImpl::UnexpectedToken { token: "b".to_string() }, position(5)));

    assert!(collector.has_errors());
    assert_eq!(collector.count(), 2);
    assert_eq!(collector.errors()[0].get_position().0, 1);

    let errors = collector.into_errors();
    assert_eq!(errors[1].get_position().0, 5);
}
