use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::expressions::{BinaryExpr, NumberExpr, PostfixExpr, PrefixExpr};

/// Operators that can appear in an expression tree.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Exclamation,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Minus => Some(Operator::Minus),
            TokenKind::Asterisk => Some(Operator::Asterisk),
            TokenKind::Exclamation => Some(Operator::Exclamation),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Plus => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
            Operator::Asterisk => write!(f, "*"),
            Operator::Exclamation => write!(f, "!"),
        }
    }
}

/// Expression Types
///
/// Tags for the variants of [`Expr`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Prefix,
    Binary,
    Postfix,
}

/// Expression tree produced by the parser.
///
/// Every child is exclusively owned by its parent, and nodes are never
/// mutated after construction; the parser only wraps earlier results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Postfix(PostfixExpr),
}

impl Expr {
    pub fn number(value: i64) -> Expr {
        Expr::Number(NumberExpr { value })
    }

    pub fn prefix(operator: Operator, right_expr: Expr) -> Expr {
        Expr::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(right_expr),
        })
    }

    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn postfix(left: Expr, operator: Operator) -> Expr {
        Expr::Postfix(PostfixExpr {
            left: Box::new(left),
            operator,
        })
    }

    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Postfix(_) => ExprType::Postfix,
        }
    }

    /// Number of nesting levels, a lone literal being depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Prefix(expr) => 1 + expr.right_expr.depth(),
            Expr::Binary(expr) => 1 + expr.left.depth().max(expr.right.depth()),
            Expr::Postfix(expr) => 1 + expr.left.depth(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Binary(expr) => Display::fmt(expr, f),
            Expr::Postfix(expr) => Display::fmt(expr, f),
        }
    }
}
