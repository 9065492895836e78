//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a syntax tree. It uses a Pratt parser for expressions with
//! binding powers for precedence and handles:
//!
//! - Statement parsing (method definitions, `do`, `if`, `return`, declarations)
//! - Expression parsing (binary ops, logical ops, calls, records, literals)
//! - Binder patterns for declarations and parameters
//! - Error recovery and reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing, looked up per token kind in a static table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod patterns;
pub mod stmt;
