//! Diagnostic sinks.
//!
//! The parser never stops on a syntax error. It hands each one to an
//! `ErrorReporter` and keeps going, so one pass can surface every
//! independent problem in a module.

use tracing::debug;

use super::errors::Error;

pub trait ErrorReporter {
    fn report(&mut self, error: Error);
}

/// Accumulates reported errors in the order they were raised.
#[derive(Debug, Default, Clone)]
pub struct ErrorCollector {
    errors: Vec<Error>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        ErrorCollector { errors: Vec::new() }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// A tree parsed while this returns `true` must not be compiled or run.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorReporter for ErrorCollector {
    fn report(&mut self, error: Error) {
        debug!(error = %error, "syntax error reported");
        self.errors.push(error);
    }
}
