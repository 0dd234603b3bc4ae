use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding power of a token; higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Number = 10,
    Sum = 20,
    Product = 30,
    Unary = 40,
}

impl BindingPower {
    pub fn value(self) -> i64 {
        self as i64
    }
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type BPLookup = fn(TokenKind) -> Option<BindingPower>;
pub type NUDLookup = fn(TokenKind) -> Option<NUDHandler>;
pub type LEDLookup = fn(TokenKind) -> Option<LEDHandler>;

/// Immutable grammar configuration handed to the parser at construction.
///
/// Bundles the precedence table and both sides of the parse function
/// registry. A `None` from any lookup means the grammar has no rule for that
/// token in that position.
#[derive(Clone, Copy)]
pub struct Grammar {
    pub binding_power_lookup: BPLookup,
    pub nud_lookup: NUDLookup,
    pub led_lookup: LEDLookup,
}

impl Grammar {
    /// Integers, binary `+` and `*`, prefix `-` and postfix `!`.
    pub const ARITHMETIC: Grammar = Grammar {
        binding_power_lookup: arithmetic_binding_power,
        nud_lookup: arithmetic_nud,
        led_lookup: arithmetic_led,
    };
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::ARITHMETIC
    }
}

// The matches below list every kind so that adding a token kind forces a
// decision in each table.

fn arithmetic_binding_power(kind: TokenKind) -> Option<BindingPower> {
    match kind {
        TokenKind::Integer => Some(BindingPower::Number),
        TokenKind::Plus => Some(BindingPower::Sum),
        TokenKind::Asterisk => Some(BindingPower::Product),
        TokenKind::Exclamation => Some(BindingPower::Unary),

        TokenKind::EOF
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Caret
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::Semicolon => None,
    }
}

fn arithmetic_nud(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals
        TokenKind::Integer => Some(parse_number_expr),

        // Prefix operators
        TokenKind::Minus => Some(parse_prefix_expr),

        TokenKind::EOF
        | TokenKind::Plus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Exclamation
        | TokenKind::Caret
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::Semicolon => None,
    }
}

fn arithmetic_led(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        // Additive and multiplicative
        TokenKind::Plus => Some(parse_binary_expr),
        TokenKind::Asterisk => Some(parse_binary_expr),

        // Postfix
        TokenKind::Exclamation => Some(parse_postfix_expr),

        TokenKind::EOF
        | TokenKind::Integer
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Caret
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::Semicolon => None,
    }
}
