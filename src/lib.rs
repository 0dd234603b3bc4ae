#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::{tokenize, DEFAULT_SOURCE_NAME},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a complete expression with the arithmetic grammar.
pub fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), None)?;
    parser::parser::parse(tokens, Rc::new(String::from(DEFAULT_SOURCE_NAME)))
}

/// Returns the 1-based line number, the line text and the column of a byte
/// offset, or `None` when the offset lies past the end of `source`.
///
/// An offset equal to `source.len()` (where `EOF` sits) resolves to the end of
/// the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = (line_number, line.to_string(), line.len());
        start = end;
        line_number += 1;
    }

    Some(last)
}

/// Renders an error as a caret-annotated report against its source.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> shell
          |
        1 | 1 / 2
          | --^
    */

    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    report.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return report;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let start = string.len() - trimmed.len();

    (String::from(trimmed), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "1 + 2\n  3 * 4\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + 2\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  3 * 4\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +", 3).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 +");
        assert_eq!(line_pos, 3);

        assert!(super::get_line_at_position("1 +", 4).is_none());
    }

    #[test]
    fn test_format_error_points_at_offending_token() {
        let error = Error::new(
            ErrorImpl::MissingPrecedence { kind: TokenKind::Slash },
            Position(2, Rc::new("shell".to_string())),
        );

        let report = super::format_error(&error, "1 / 2", "shell");
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[0].starts_with("Error: MissingPrecedence"));
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | 1 / 2");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_format_error_on_tab_indented_line() {
        let source = "1 +\n\t\t2 / 3";
        let error = super::parse_source(source).unwrap_err();
        let report = super::format_error(&error, source, "calc.expr");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(error.get_position().0, 8);
        assert_eq!(lines[3], "2 | 2 / 3");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_parse_source() {
        let expr = super::parse_source("1 + 2 * 3").unwrap();
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }
}
