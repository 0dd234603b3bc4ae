//! Parser module for building the expression tree.
//!
//! This module contains the Pratt parser that transforms a stream of
//! tokens into an `Expr`. Each token kind carries a binding power, and
//! parsing routines are selected by kind and position:
//!
//! - NUD (null denotation) routines start an expression: integer literals
//!   and prefix `-`
//! - LED (left denotation) routines continue one: binary `+`/`*` and
//!   postfix `!`
//!
//! The lookup tables live in an immutable `Grammar` passed to the parser.

pub mod expr;
pub mod lookups;
pub mod parser;
