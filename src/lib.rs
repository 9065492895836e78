#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::{parse, parse_with_options, Parser, ParserOptions};

/// A byte offset into a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }

    /// Returns a span running from the start of `self` to the end of `other`.
    pub fn span_to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the text of the line and the column of
/// `position` within it. Offsets past the end of the source land on the last
/// line.
pub fn line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Position sits at the very end of the source.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.len())
        }
        _ => (line_number, String::new(), 0),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{errors::errors::{Error, ErrorImpl}, Position, Span};

    #[test]
    fn test_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::line_at_position(source, 27);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::line_at_position("a\nbc", 4);
        assert_eq!(line_number, 2);
        assert_eq!(line, "bc");
        assert_eq!(line_pos, 2);
    }

    #[test]
    fn test_span_to() {
        let file = Arc::new("test.mag".to_string());
        let a = Span { start: Position(2, file.clone()), end: Position(4, file.clone()) };
        let b = Span { start: Position(8, file.clone()), end: Position(11, file.clone()) };

        let joined = a.span_to(&b);
        assert_eq!(joined.start.0, 2);
        assert_eq!(joined.end.0, 11);
    }

    #[test]
    fn test_format_error() {
        let source = "var a = 1\nvar = 2\n";
        let file = Arc::new("test.mag".to_string());
        let error = Error::new(
            ErrorImpl::MalformedPattern { token: "=".to_string() },
            Position(14, file),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: MalformedPattern (Expected pattern, found `=`)");
        assert_eq!(lines[1], "-> test.mag");
        assert_eq!(lines[3], "2 | var = 2");
        assert_eq!(lines[4], "  | ----^");
    }
}

/// Renders an error against its source text.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token `)`)
/// -> module.mag
///    |
/// 20 | var a = )
///    | --------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
