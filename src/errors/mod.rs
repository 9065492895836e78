//! Error types and error reporting for the front end.
//!
//! This module defines the syntax errors raised while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way the grammar can be violated
//! - The `ErrorReporter` sink the parser reports through, and a collector
//! - Helpful error messages and suggestions

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
