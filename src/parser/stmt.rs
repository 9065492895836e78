use crate::{
    ast::{
        ast::Node,
        expressions::ErrorExpr,
        statements::{DefMethodStmt, DoStmt, IfStmt, ReturnStmt, VarDeclStmt},
    },
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser, patterns::parse_pattern};

/// Parses a statement: a keyword-led form, or an expression.
pub fn parse_stmt(parser: &mut Parser) -> Node {
    if let Some(handler) = stmt_lookup(parser.current_token_kind()) {
        let token = parser.advance();
        return handler(parser, token);
    }

    parse_expr(parser, BindingPower::Default)
}

/// `def (left) name(right) body`
///
/// Both parameters are optional. `name()` declares no right parameter,
/// exactly like `name`.
pub fn parse_def_stmt(parser: &mut Parser, token: Token) -> Node {
    let start = token.span;

    let mut left_param = None;
    if parser.match_token(TokenKind::OpenParen) {
        left_param = parse_pattern(parser);
        parser.expect(TokenKind::CloseParen, "Expect ')' after pattern.");
    }

    let name = parser.expect(TokenKind::Name, "Expect a method name after 'def'.");

    let mut right_param = None;
    if parser.match_token(TokenKind::OpenParen) && !parser.match_token(TokenKind::CloseParen) {
        right_param = parse_pattern(parser);
        parser.expect(TokenKind::CloseParen, "Expect ')' after pattern.");
    }

    let body = parser.parse_end_block();

    Node::DefMethod(DefMethodStmt::new(
        left_param,
        name.value,
        right_param,
        body,
        start.span_to(&parser.last_span()),
    ))
}

pub fn parse_do_stmt(parser: &mut Parser, token: Token) -> Node {
    let body = parser.parse_end_block();

    Node::Do(DoStmt::new(body, token.span.span_to(&parser.last_span())))
}

/// `if condition then then-arm [else else-arm] [end]`
pub fn parse_if_stmt(parser: &mut Parser, token: Token) -> Node {
    let start = token.span;

    let (condition, _) = parser.parse_block(TokenKind::Then, TokenKind::Then);
    parser.expect(TokenKind::Then, "Expect 'then' after 'if' condition.");

    let (then_arm, then_end) = parser.parse_block(TokenKind::Else, TokenKind::End);

    // A then-arm block that closed with `end` closes the whole `if`, so no
    // else-arm is looked for.
    let mut else_arm = None;
    let mut last_end = then_end;
    if then_end != Some(TokenKind::End) && parser.match_token(TokenKind::Else) {
        let (node, else_end) = parser.parse_block(TokenKind::End, TokenKind::End);
        else_arm = Some(node);
        last_end = else_end;
    }

    // A single-line `if` may still be closed with `end`, unless an enclosing
    // block is waiting for that `end`.
    if last_end.is_none() && !parser.in_end_block() {
        parser.match_token(TokenKind::End);
    }

    Node::If(IfStmt::new(condition, then_arm, else_arm, start.span_to(&parser.last_span())))
}

/// `return [value]`
pub fn parse_return_stmt(parser: &mut Parser, token: Token) -> Node {
    let value = if parser.look_ahead(TokenKind::Line) || parser.look_ahead(TokenKind::EOF) {
        None
    } else {
        Some(parse_stmt(parser))
    };

    Node::Return(ReturnStmt::new(value, token.span.span_to(&parser.last_span())))
}

/// `var pattern = value` or `val pattern = value`
pub fn parse_var_decl_stmt(parser: &mut Parser, token: Token) -> Node {
    let is_mutable = token.kind == TokenKind::Var;
    let start = token.span;

    let pattern = parse_pattern(parser);
    parser.expect(TokenKind::Assignment, "Expect '=' after variable declaration.");
    let value = parse_expr(parser, BindingPower::Default);

    let span = start.span_to(&parser.last_span());
    match pattern {
        Some(pattern) => Node::Variable(VarDeclStmt::new(is_mutable, pattern, value, span)),
        None => Node::Error(ErrorExpr::new(span)),
    }
}
