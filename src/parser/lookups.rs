//! The precedence table.
//!
//! Every token kind maps to an optional prefix (NUD) handler, an optional
//! infix (LED) handler and the binding power of that infix handler. The
//! mapping is a `match` over `TokenKind` with no wildcard arm, so adding a
//! token kind does not compile until its entry is written here. The table
//! holds no state and is shared freely between parsers on any thread.

use crate::{ast::ast::Node, lexer::tokens::{Token, TokenKind}};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator binding powers, lowest first.
///
/// `Default` is the floor that full expressions are parsed at. `Assignment`,
/// `Not` and `Negate` hold their place in the ordering but no token parses
/// at them yet.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Assignment = 1,
    Record = 2,
    Logical = 3,
    Not = 4,
    Equality = 5,
    Comparison = 6,
    Additive = 7,
    Multiplicative = 8,
    Negate = 9,
    Call = 10,
}

pub type StmtHandler = fn(&mut Parser<'_>, Token) -> Node;
pub type NUDHandler = fn(&mut Parser<'_>, Token) -> Node;
pub type LEDHandler = fn(&mut Parser<'_>, Node, Token) -> Node;

#[derive(Clone, Copy)]
pub struct ParseRule {
    pub nud: Option<NUDHandler>,
    pub led: Option<LEDHandler>,
    pub binding_power: BindingPower,
}

impl ParseRule {
    pub const NONE: ParseRule = ParseRule {
        nud: None,
        led: None,
        binding_power: BindingPower::Default,
    };

    fn prefix(nud: NUDHandler) -> Self {
        ParseRule { nud: Some(nud), ..ParseRule::NONE }
    }

    fn infix(led: LEDHandler, binding_power: BindingPower) -> Self {
        ParseRule { nud: None, led: Some(led), binding_power }
    }

    fn prefix_infix(nud: NUDHandler, led: LEDHandler, binding_power: BindingPower) -> Self {
        ParseRule { nud: Some(nud), led: Some(led), binding_power }
    }
}

pub fn expression_lookup(kind: TokenKind) -> ParseRule {
    match kind {
        TokenKind::OpenParen => ParseRule::prefix(parse_grouping_expr),
        TokenKind::Comma => ParseRule::infix(parse_infix_record_expr, BindingPower::Record),

        // Logical
        TokenKind::And => ParseRule::infix(parse_and_expr, BindingPower::Logical),
        TokenKind::Or => ParseRule::infix(parse_or_expr, BindingPower::Logical),
        TokenKind::Not => ParseRule::prefix(parse_not_expr),

        // Equality and comparison
        TokenKind::Equals | TokenKind::NotEquals => {
            ParseRule::infix(parse_binary_expr, BindingPower::Equality)
        }
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => ParseRule::infix(parse_binary_expr, BindingPower::Comparison),

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash => ParseRule::infix(parse_binary_expr, BindingPower::Additive),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
            ParseRule::infix(parse_binary_expr, BindingPower::Multiplicative)
        }

        // Names are bare references in prefix position and method calls on
        // whatever precedes them in infix position.
        TokenKind::Name => ParseRule::prefix_infix(parse_name_expr, parse_call_expr, BindingPower::Call),

        // Literals
        TokenKind::True | TokenKind::False => ParseRule::prefix(parse_bool_expr),
        TokenKind::Nothing => ParseRule::prefix(parse_nothing_expr),
        TokenKind::Number => ParseRule::prefix(parse_number_expr),
        TokenKind::String => ParseRule::prefix(parse_string_expr),
        TokenKind::Field => ParseRule::prefix(parse_record_expr),

        TokenKind::CloseParen
        | TokenKind::OpenBracket
        | TokenKind::CloseBracket
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Assignment
        | TokenKind::Case
        | TokenKind::Def
        | TokenKind::Do
        | TokenKind::Else
        | TokenKind::End
        | TokenKind::For
        | TokenKind::If
        | TokenKind::Is
        | TokenKind::Match
        | TokenKind::Return
        | TokenKind::Then
        | TokenKind::Val
        | TokenKind::Var
        | TokenKind::While
        | TokenKind::Xor
        | TokenKind::Line
        | TokenKind::Error
        | TokenKind::EOF => ParseRule::NONE,
    }
}

/// Keywords that start a statement rather than an expression.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Def => parse_def_stmt,
        TokenKind::Do => parse_do_stmt,
        TokenKind::If => parse_if_stmt,
        TokenKind::Return => parse_return_stmt,
        TokenKind::Var | TokenKind::Val => parse_var_decl_stmt,
        _ => return None,
    };

    Some(handler)
}
