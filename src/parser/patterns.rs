//! Pattern parsing.
//!
//! Patterns name what a declaration or method parameter binds. Only two
//! forms exist: a name, which binds the value to it, and `nothing`, which
//! ignores the value.

use crate::{
    ast::patterns::{BindPattern, IgnorePattern, Pattern},
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses a binder pattern.
///
/// On anything else a `MalformedPattern` error is reported and `None`
/// returned. The offending token is consumed, unless it is the `=` or `)`
/// that follows a pattern, which is left for the caller to match.
pub fn parse_pattern(parser: &mut Parser) -> Option<Pattern> {
    match parser.current_token_kind() {
        TokenKind::Name => {
            let token = parser.advance();
            Some(Pattern::Bind(BindPattern::new(token.value, token.span)))
        }
        TokenKind::Nothing => {
            let token = parser.advance();
            Some(Pattern::Ignore(IgnorePattern::new(token.span)))
        }
        _ => {
            let token = parser.current_token().clone();
            parser.report(
                ErrorImpl::MalformedPattern { token: token.to_string() },
                token.span.start,
            );

            if !matches!(token.kind, TokenKind::Assignment | TokenKind::CloseParen) {
                parser.advance();
            }
            None
        }
    }
}
