//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the module/block level
//! grammar. The parser pulls tokens lazily from a `TokenSource` through a
//! small lookahead queue and dispatches through the precedence table in
//! `lookups` for expressions.
//!
//! Syntax errors never abort a parse. Each one is handed to the
//! `ErrorReporter`, the offending token is consumed and parsing carries on,
//! leaving an error node where a subtree could not be built.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    ast::{ast::Node, statements::SequenceStmt},
    errors::{
        errors::{Error, ErrorImpl},
        reporter::{ErrorCollector, ErrorReporter},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
    Position, Span,
};

use super::stmt::parse_stmt;

/// Options that change what the parser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Report a `DuplicateFieldLabel` error when a record literal uses the
    /// same explicit label twice. Off by default: colliding labels are left
    /// for the record type registry to resolve.
    pub reject_duplicate_labels: bool,
}

/// The main parser structure that maintains parsing state.
///
/// One parser parses one module. It exclusively owns its token source,
/// lookahead queue and error reporter handle, so independent modules can be
/// parsed concurrently by independent parsers.
pub struct Parser<'a> {
    /// Where tokens come from
    tokens: Box<dyn TokenSource + 'a>,
    /// Tokens peeked at but not yet consumed, oldest first
    read: VecDeque<Token>,
    /// The most recently consumed token, used to close spans
    last: Option<Token>,
    /// Sink for syntax errors
    reporter: &'a mut dyn ErrorReporter,
    /// Number of errors reported so far
    error_count: usize,
    /// Multi-line blocks currently open that are closed by `end`
    open_end_blocks: usize,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token source to pull from
    /// * `reporter` - Receives every syntax error found while parsing
    pub fn new(tokens: impl TokenSource + 'a, reporter: &'a mut dyn ErrorReporter) -> Self {
        Parser::with_options(tokens, reporter, ParserOptions::default())
    }

    pub fn with_options(
        tokens: impl TokenSource + 'a,
        reporter: &'a mut dyn ErrorReporter,
        options: ParserOptions,
    ) -> Self {
        Parser {
            tokens: Box::new(tokens),
            read: VecDeque::new(),
            last: None,
            reporter,
            error_count: 0,
            open_end_blocks: 0,
            options,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether an enclosing multi-line block is waiting for an `end`.
    pub fn in_end_block(&self) -> bool {
        self.open_end_blocks > 0
    }

    fn fill_look_ahead(&mut self, count: usize) {
        while self.read.len() < count {
            let token = self.tokens.next_token();
            self.read.push_back(token);
        }
    }

    /// Returns the current token without consuming it.
    pub fn current_token(&mut self) -> &Token {
        self.fill_look_ahead(1);
        &self.read[0]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.current_token().kind
    }

    /// Whether the current token is of the given kind.
    pub fn look_ahead(&mut self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Whether the current and next tokens are of the given kinds.
    pub fn look_ahead_two(&mut self, current: TokenKind, next: TokenKind) -> bool {
        self.fill_look_ahead(2);
        self.read[0].is(current) && self.read[1].is(next)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        let token = match self.read.pop_front() {
            Some(token) => token,
            None => self.tokens.next_token(),
        };

        trace!(kind = ?token.kind, value = %token.value, "consumed token");
        self.last = Some(token.clone());
        token
    }

    /// Consumes the current token if it is of the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.look_ahead(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token that must be of the given kind.
    ///
    /// If the current token is of another kind the error is reported and the
    /// token is consumed anyway, so parsing can go on looking for more errors.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Token {
        if !self.look_ahead(expected_kind) {
            let token = self.current_token().clone();
            self.report(
                ErrorImpl::MissingExpectedToken {
                    expected: expected_kind,
                    found: token.to_string(),
                    message: message.to_string(),
                },
                token.span.start,
            );
        }

        self.advance()
    }

    /// Span of the most recently consumed token.
    pub fn last_span(&self) -> Span {
        match &self.last {
            Some(token) => token.span.clone(),
            None => Span::null(),
        }
    }

    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        self.error_count += 1;
        self.reporter.report(Error::new(error, position));
    }

    /// Parses a whole module: statements separated by newlines up to the end
    /// of the file.
    pub fn parse_module(&mut self) -> Node {
        debug!("parsing module");

        let mut body = vec![];

        loop {
            if self.look_ahead(TokenKind::EOF) {
                break;
            }
            body.push(parse_stmt(self));

            if !self.finish_statement(&[]) {
                break;
            }
        }

        self.expect(TokenKind::EOF, "Expect end of file.");

        let module = self.create_sequence(body);
        debug!(errors = self.error_count, "parsed module");
        module
    }

    /// Parses a block that can only be closed by `end`.
    pub fn parse_end_block(&mut self) -> Node {
        self.parse_block(TokenKind::End, TokenKind::End).0
    }

    /// Parses either a multi-line block or a single inline statement.
    ///
    /// A block starts with a newline and runs until `end1` or `end2`. The
    /// terminator found is returned; it is consumed only when it is `end`,
    /// so callers can still see an `else` or `then`. An inline statement has
    /// no terminator and returns `None`.
    pub fn parse_block(&mut self, end1: TokenKind, end2: TokenKind) -> (Node, Option<TokenKind>) {
        if !self.match_token(TokenKind::Line) {
            return (parse_stmt(self), None);
        }

        let closed_by_end = end1 == TokenKind::End || end2 == TokenKind::End;
        if closed_by_end {
            self.open_end_blocks += 1;
        }

        let mut body = vec![];

        loop {
            if self.look_ahead(end1) || self.look_ahead(end2) || self.look_ahead(TokenKind::EOF) {
                break;
            }
            body.push(parse_stmt(self));

            if !self.finish_statement(&[end1, end2]) {
                break;
            }
        }

        if closed_by_end {
            self.open_end_blocks -= 1;
        }

        let end = self.current_token_kind();
        trace!(?end, "block terminated");

        if end == TokenKind::End {
            self.advance();
        } else if end == TokenKind::EOF && closed_by_end {
            let position = self.current_token().span.start.clone();
            self.report(
                ErrorImpl::MissingExpectedToken {
                    expected: TokenKind::End,
                    found: TokenKind::EOF.describe().to_string(),
                    message: "Expect 'end' after block.".to_string(),
                },
                position,
            );
        }

        (self.create_sequence(body), Some(end))
    }

    /// Consumes the newline after a statement in a statement list.
    ///
    /// Returns `false` when the list has ended: the current token is end of
    /// file or one of `terminators`. Anything else left on the line is
    /// reported once and skipped up to the next newline.
    fn finish_statement(&mut self, terminators: &[TokenKind]) -> bool {
        if self.match_token(TokenKind::Line) {
            return true;
        }

        let kind = self.current_token_kind();
        if kind == TokenKind::EOF || terminators.contains(&kind) {
            return false;
        }

        let token = self.current_token().clone();
        self.report(
            ErrorImpl::MissingExpectedToken {
                expected: TokenKind::Line,
                found: token.to_string(),
                message: "Expect newline after statement.".to_string(),
            },
            token.span.start,
        );

        while !self.look_ahead(TokenKind::Line) && !self.look_ahead(TokenKind::EOF) {
            self.advance();
        }
        self.match_token(TokenKind::Line)
    }

    /// Wraps parsed statements into a single node.
    ///
    /// A single statement is returned as is.
    pub fn create_sequence(&mut self, mut body: Vec<Node>) -> Node {
        if body.len() == 1 {
            if let Some(node) = body.pop() {
                return node;
            }
        }

        let span = match (body.first(), body.last()) {
            (Some(first), Some(last)) => first.get_span().span_to(last.get_span()),
            _ => {
                let position = self.current_token().span.start.clone();
                Span { start: position.clone(), end: position }
            }
        };

        Node::Sequence(SequenceStmt::new(body, span))
    }
}

/// Parses source text into a syntax tree.
///
/// This is the main entry point for parsing. It scans and parses the whole
/// source in one pass.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name of the source file, used in positions (`"shell"` if absent)
///
/// # Returns
///
/// A tuple containing:
/// - The module's root node
/// - Every syntax error found. If this is not empty the tree must not be
///   compiled or run.
pub fn parse(source: String, file: Option<String>) -> (Node, Vec<Error>) {
    parse_with_options(source, file, ParserOptions::default())
}

pub fn parse_with_options(
    source: String,
    file: Option<String>,
    options: ParserOptions,
) -> (Node, Vec<Error>) {
    let mut errors = ErrorCollector::new();

    let module = {
        let mut parser = Parser::with_options(Lexer::new(source, file), &mut errors, options);
        parser.parse_module()
    };

    (module, errors.into_errors())
}
