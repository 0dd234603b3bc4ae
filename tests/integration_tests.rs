//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through tokenization,
//! parsing and rendering, including diagnostics for malformed input.

use std::rc::Rc;

use pratt::{
    ast::ast::{Expr, ExprType},
    errors::errors::{Denotation, ErrorImpl},
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
    parser::{
        lookups::{BindingPower, Grammar},
        parser::{parse, parse_with, Parser, MAX_NESTING_DEPTH},
    },
};

#[test]
fn test_reference_scenarios() {
    let cases = [
        ("1", "1"),
        ("-1", "-1"),
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("2!", "(2!)"),
        ("0 + 1 + 2! * -3", "((0 + 1) + ((2!) * -3))"),
    ];

    for (offset, (input, output)) in cases.iter().enumerate() {
        let expr = parse_source(input).unwrap();
        assert_eq!(expr.to_string(), *output, "offset = [{}]", offset);
    }
}

#[test]
fn test_whitespace_insensitive() {
    let spaced = parse_source("0 + 1 + 2 ! * - 3").unwrap();
    let packed = parse_source("0+1+2!*-3").unwrap();
    let newlines = parse_source("0 +\n1\n+ 2!\n* -3\n").unwrap();

    assert_eq!(spaced, packed);
    assert_eq!(spaced, newlines);
}

#[test]
fn test_tokenize_then_parse_with_file_name() {
    let tokens = tokenize("12 * 3!".to_string(), Some("calc.expr".to_string())).unwrap();
    let expr = parse(tokens, Rc::new("calc.expr".to_string())).unwrap();

    assert_eq!(expr.get_expr_type(), ExprType::Binary);
    assert_eq!(expr.to_string(), "(12 * (3!))");
}

#[test]
fn test_round_trip_stability() {
    let source = "-4! * 2 + 3 * 5 + 1!!";
    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_string(), "((((-4!) * 2) + (3 * 5)) + ((1!)!))");
}

#[test]
fn test_error_positions_point_at_offending_token() {
    let error = parse_source("1 + 2 / 3").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::MissingPrecedence { kind: TokenKind::Slash });
    assert_eq!(error.get_position().0, 6);

    let error = parse_source("1 + )").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::MissingParseRoutine {
            kind: TokenKind::CloseParen,
            position: Denotation::Prefix
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_lexer_errors_surface_through_parse_source() {
    let error = parse_source("1 + x").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "x".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_format_error_report() {
    let source = "1 * 2 +";
    let error = parse_source(source).unwrap_err();
    let report = format_error(&error, source, "shell");

    let expected = "Error: UnexpectedEndOfInput (Expected an operand after `+`)\n\
                    -> shell\n  |\n1 | 1 * 2 +\n  | -------^\n";
    assert_eq!(report, expected);
}

#[test]
fn test_format_error_on_second_line() {
    let source = "1 +\n  2 / 3";
    let error = parse_source(source).unwrap_err();
    let report = format_error(&error, source, "calc.expr");
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Error: MissingPrecedence (`/` cannot continue an expression)");
    assert_eq!(lines[1], "-> calc.expr");
    assert_eq!(lines[3], "2 | 2 / 3");
    assert_eq!(lines[4], "  | --^");
}

#[test]
fn test_parser_can_stop_at_a_floor() {
    let tokens = tokenize("2 * 3 + 4".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("shell".to_string()), Grammar::ARITHMETIC);

    let head = parser.parse(BindingPower::Sum).unwrap();
    assert_eq!(head.to_string(), "(2 * 3)");
    assert_eq!(parser.current_token_kind(), TokenKind::Plus);
    parser.close();
}

#[test]
fn test_parse_with_default_grammar_matches_parse() {
    let source = "7 + -8 * 9!";
    let tokens = tokenize(source.to_string(), None).unwrap();
    let expr = parse_with(
        tokens,
        Rc::new("shell".to_string()),
        Grammar::default(),
        BindingPower::Default,
    )
    .unwrap();

    assert_eq!(expr, parse_source(source).unwrap());
}

#[test]
fn test_deep_prefix_nesting() {
    let source = format!("{}1", "-".repeat(200));
    let expr = parse_source(&source).unwrap();

    assert_eq!(expr.depth(), 201);
    assert_eq!(expr.to_string(), source);

    let source = format!("{}1", "-".repeat(10_000));
    let error = parse_source(&source).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    assert_eq!(error.get_position().0, MAX_NESTING_DEPTH as u32);

    let report = format_error(&error, &source, "shell");
    assert!(report.starts_with("Error: NestingTooDeep"));
}

#[test]
fn test_long_chains_are_rejected_before_they_get_too_deep() {
    let bangs = format!("1{}", "!".repeat(10_000));
    let error = parse_source(&bangs).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH });

    let factorial_sum = vec!["1!"; 10_000].join(" + ");
    let error = parse_source(&factorial_sum).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH });

    let flat_sum = vec!["1"; 10_000].join(" + ");
    let error = parse_source(&flat_sum).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH });
}

#[test]
fn test_long_sum_is_left_leaning() {
    let source = (0..100).map(|n| n.to_string()).collect::<Vec<_>>().join(" + ");
    let expr = parse_source(&source).unwrap();

    assert_eq!(expr.depth(), 100);
    match expr {
        Expr::Binary(binary) => assert_eq!(*binary.right, Expr::number(99)),
        other => panic!("expected binary expression, got {:?}", other),
    }
}
