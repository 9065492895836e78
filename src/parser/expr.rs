use std::collections::HashSet;

use crate::{
    ast::{
        ast::Node,
        expressions::{
            AndExpr, BinaryExpr, BoolExpr, CallExpr, ErrorExpr, Field, NameExpr, NotExpr,
            NothingExpr, NumberExpr, Operator, OrExpr, RecordExpr, StringExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{expression_lookup, BindingPower},
    parser::Parser,
    stmt::parse_stmt,
};

/// Parses an expression whose infix operators all bind tighter than `bp`.
///
/// An operator at exactly `bp` is left for the caller, which is what makes
/// operators of equal power associate to the left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Node {
    let token = parser.advance();

    let Some(nud) = expression_lookup(token.kind).nud else {
        parser.report(
            ErrorImpl::UnexpectedToken { token: token.to_string() },
            token.span.start.clone(),
        );
        return Node::Error(ErrorExpr::new(token.span));
    };

    let mut left = nud(parser, token);

    loop {
        let rule = expression_lookup(parser.current_token_kind());
        let Some(led) = rule.led else {
            break;
        };
        if rule.binding_power <= bp {
            break;
        }

        let token = parser.advance();
        left = led(parser, left, token);
    }

    left
}

pub fn parse_bool_expr(_parser: &mut Parser, token: Token) -> Node {
    Node::Bool(BoolExpr::new(token.kind == TokenKind::True, token.span))
}

pub fn parse_nothing_expr(_parser: &mut Parser, token: Token) -> Node {
    Node::Nothing(NothingExpr::new(token.span))
}

pub fn parse_number_expr(parser: &mut Parser, token: Token) -> Node {
    match token.value.parse::<f64>() {
        Ok(value) => Node::Number(NumberExpr::new(value, token.span)),
        Err(_) => {
            parser.report(
                ErrorImpl::NumberParseError { token: token.value.clone() },
                token.span.start.clone(),
            );
            Node::Error(ErrorExpr::new(token.span))
        }
    }
}

pub fn parse_string_expr(_parser: &mut Parser, token: Token) -> Node {
    Node::String(StringExpr::new(token.value, token.span))
}

/// `not` binds as tightly as a call: `not a == b` is `(not a) == b`.
pub fn parse_not_expr(parser: &mut Parser, token: Token) -> Node {
    let value = parse_expr(parser, BindingPower::Call);

    Node::Not(NotExpr::new(value, token.span.span_to(&parser.last_span())))
}

pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Node {
    let expr = parse_expr(parser, BindingPower::Default);
    parser.expect(TokenKind::CloseParen, "Expect ')' after expression.");

    expr
}

pub fn parse_name_expr(parser: &mut Parser, token: Token) -> Node {
    parse_call(parser, None, token)
}

pub fn parse_call_expr(parser: &mut Parser, left: Node, token: Token) -> Node {
    parse_call(parser, Some(left), token)
}

/// Builds a call to the method named by `token`, or a bare name.
///
/// `left` is the receiver already parsed when the name appears in infix
/// position. A parenthesised argument list, even an empty one, makes this a
/// call; without one and without a receiver it is just a name.
fn parse_call(parser: &mut Parser, left: Option<Node>, token: Token) -> Node {
    let mut has_right_arg = false;
    let mut right = None;

    if parser.match_token(TokenKind::OpenParen) {
        has_right_arg = true;

        // `()` marks a call without providing an argument.
        if !parser.match_token(TokenKind::CloseParen) {
            right = Some(parse_stmt(parser));
            parser.expect(TokenKind::CloseParen, "Expect ')' after call argument.");
        }
    }

    if left.is_none() && !has_right_arg {
        return Node::Name(NameExpr::new(token.value, token.span));
    }

    let start = match &left {
        Some(left) => left.get_span().clone(),
        None => token.span.clone(),
    };

    Node::Call(CallExpr::new(left, token.value, right, start.span_to(&parser.last_span())))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, token: Token) -> Node {
    let bp = expression_lookup(token.kind).binding_power;

    // Parsing the right operand at the operator's own power keeps it
    // left-associative. There are no right-associative operators.
    let right = parse_expr(parser, bp);
    let span = left.get_span().span_to(&parser.last_span());

    match Operator::from_token_kind(token.kind) {
        Some(operator) => Node::BinaryOp(BinaryExpr::new(left, operator, right, span)),
        None => {
            parser.report(
                ErrorImpl::UnexpectedToken { token: token.to_string() },
                token.span.start.clone(),
            );
            Node::Error(ErrorExpr::new(span))
        }
    }
}

pub fn parse_and_expr(parser: &mut Parser, left: Node, _token: Token) -> Node {
    let right = parse_expr(parser, BindingPower::Logical);
    let span = left.get_span().span_to(&parser.last_span());

    Node::And(AndExpr::new(left, right, span))
}

pub fn parse_or_expr(parser: &mut Parser, left: Node, _token: Token) -> Node {
    let right = parse_expr(parser, BindingPower::Logical);
    let span = left.get_span().span_to(&parser.last_span());

    Node::Or(OrExpr::new(left, right, span))
}

/// Tracks field labels while a record literal is being parsed.
struct RecordBuilder {
    fields: Vec<Field>,
    seen: HashSet<String>,
    /// Label given to the next unlabelled field
    position: usize,
}

impl RecordBuilder {
    fn new() -> Self {
        RecordBuilder { fields: vec![], seen: HashSet::new(), position: 1 }
    }

    fn add_labelled(&mut self, parser: &mut Parser, label: Token, value: Node) {
        if !self.seen.insert(label.value.clone()) && parser.options().reject_duplicate_labels {
            parser.report(
                ErrorImpl::DuplicateFieldLabel { label: label.value.clone() },
                label.span.start.clone(),
            );
        }

        self.fields.push(Field::new(label.value, value));
    }

    fn add_positional(&mut self, value: Node) {
        let label = self.position.to_string();
        self.position += 1;

        self.seen.insert(label.clone());
        self.fields.push(Field::new(label, value));
    }

    /// Parses one field after a comma: an optional label, then the value.
    fn parse_field(&mut self, parser: &mut Parser) {
        if parser.look_ahead(TokenKind::Field) {
            let label = parser.advance();
            let value = parse_field_value(parser);
            self.add_labelled(parser, label, value);
        } else {
            let value = parse_field_value(parser);
            self.add_positional(value);
        }
    }
}

/// Field values may use `and`/`or` but stop at the next comma.
fn parse_field_value(parser: &mut Parser) -> Node {
    parse_expr(parser, BindingPower::Record)
}

/// A record literal starting with a labelled field: `x: 1, 2, y: 3`.
pub fn parse_record_expr(parser: &mut Parser, token: Token) -> Node {
    let start = token.span.clone();
    let mut record = RecordBuilder::new();

    let value = parse_field_value(parser);
    record.add_labelled(parser, token, value);

    while parser.match_token(TokenKind::Comma) {
        record.parse_field(parser);
    }

    Node::Record(RecordExpr::new(record.fields, start.span_to(&parser.last_span())))
}

/// A record literal whose first field is the expression before the comma:
/// `1, 2, x: 3`.
pub fn parse_infix_record_expr(parser: &mut Parser, left: Node, _token: Token) -> Node {
    let start = left.get_span().clone();
    let mut record = RecordBuilder::new();

    record.seen.insert(String::from("0"));
    record.fields.push(Field::new(String::from("0"), left));

    loop {
        record.parse_field(parser);

        if !parser.match_token(TokenKind::Comma) {
            break;
        }
    }

    Node::Record(RecordExpr::new(record.fields, start.span_to(&parser.last_span())))
}
