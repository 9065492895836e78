use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("case", TokenKind::Case);
        map.insert("def", TokenKind::Def);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("is", TokenKind::Is);
        map.insert("match", TokenKind::Match);
        map.insert("not", TokenKind::Not);
        map.insert("nothing", TokenKind::Nothing);
        map.insert("or", TokenKind::Or);
        map.insert("return", TokenKind::Return);
        map.insert("then", TokenKind::Then);
        map.insert("true", TokenKind::True);
        map.insert("val", TokenKind::Val);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map.insert("xor", TokenKind::Xor);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Punctuators
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Comma,
    Assignment, // =

    // Operators
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Equals,        // ==
    NotEquals,     // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    // Reserved
    And,
    Case,
    Def,
    Do,
    Else,
    End,
    False,
    For,
    If,
    Is,
    Match,
    Not,
    Nothing,
    Or,
    Return,
    Then,
    True,
    Val,
    Var,
    While,
    Xor,

    Field, // label:
    Name,
    Number,
    String,

    Line,
    Error,
    EOF,
}

impl TokenKind {
    /// Returns the source text of fixed-text tokens, or a description for
    /// tokens whose text varies.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::And => "and",
            TokenKind::Case => "case",
            TokenKind::Def => "def",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Is => "is",
            TokenKind::Match => "match",
            TokenKind::Not => "not",
            TokenKind::Nothing => "nothing",
            TokenKind::Or => "or",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Xor => "xor",
            TokenKind::Field => "field label",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Line => "newline",
            TokenKind::Error => "invalid token",
            TokenKind::EOF => "end of file",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Field => write!(f, "{}:", self.value),
            TokenKind::String => write!(f, "\"{}\"", self.value),
            TokenKind::Line => write!(f, "newline"),
            TokenKind::EOF => write!(f, "end of file"),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Supplies tokens to the parser on demand.
///
/// Once the input is exhausted, every further call yields an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already scanned list of tokens.
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span { start: last.span.end.clone(), end: last.span.end.clone() },
            },
            None => Token { kind: TokenKind::EOF, value: String::from("EOF"), span: Span::null() },
        };

        TokenStream { tokens: tokens.into_iter(), eof }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}
