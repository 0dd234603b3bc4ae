use std::fmt::Display;

use super::ast::{Expr, Operator};

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: i64,
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

/// Prefix Expression
/// Represents a unary prefix operation such as `-x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpr {
    pub operator: Operator,
    pub right_expr: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.right_expr)
    }
}

/// Binary Expression
/// Represents an infix operation with both operands, such as `a + b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// Postfix Expression
/// Represents a unary postfix operation such as `x!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
}

impl Display for PostfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.left, self.operator)
    }
}
