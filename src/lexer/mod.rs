//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, names, field labels and literals
//! - Statement separators (newlines and `;`)
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! Tokens are produced lazily through the `TokenSource` trait, so the
//! parser pulls only as many as its lookahead needs.

pub mod lexer;
pub mod tokens;
