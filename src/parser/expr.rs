use crate::{
    ast::ast::{Expr, Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.depth();
    let result = parse_nested_expr(parser, bp);
    parser.unwind_to(depth);
    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.descend()?;

    // First parse NUD
    let nud = parser.get_nud(parser.current_token_kind())?;
    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, fold it into lhs
    while parser.has_tokens() {
        let token_kind = parser.current_token_kind();
        let token_bp = parser.get_binding_power(token_kind)?;
        if token_bp <= bp {
            break;
        }

        let led = parser.get_led(token_kind)?;
        // Each fold wraps lhs one level deeper
        parser.descend()?;
        tracing::trace!(kind = %token_kind, ?token_bp, min_bp = ?bp, "led");
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

fn operator_of(token: &Token) -> Result<Operator, Error> {
    Operator::from_token_kind(token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken { kind: token.kind },
            token.span.start.clone(),
        )
    })
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let result = parser.current_literal().parse::<i64>();

    match result {
        Ok(value) => {
            parser.advance();
            Ok(Expr::number(value))
        }
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: parser.current_literal().to_string(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = operator_of(&operator_token)?;

    // Operand is the smallest unit: a literal, another prefix or a postfix result
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::prefix(operator, rhs))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = operator_of(&operator_token)?;

    // Recursing at the operator's own power leaves equal-power operators to
    // the caller's loop, which makes them left associative.
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(left, operator, right))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = operator_of(&operator_token)?;
    let expr = Expr::postfix(left, operator);

    if !parser.has_tokens() {
        return Ok(expr);
    }

    // The postfix result is immediately the left operand of whatever follows,
    // without going back through the binding power check.
    let token_kind = parser.current_token_kind();
    let led = parser.get_led(token_kind)?;
    let token_bp = parser.get_binding_power(token_kind)?;
    parser.descend()?;

    led(parser, expr, token_bp)
}
