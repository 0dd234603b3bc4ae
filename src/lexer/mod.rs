//! Lexical analysis module.
//!
//! This module contains the lexer that converts expression source text
//! into tokens, and the forward-only token stream the parser consumes:
//!
//! - Tokenization using anchored regex patterns
//! - Integer literals and single-character operators and punctuation
//! - Token position tracking for error reporting

pub mod lexer;
pub mod stream;
pub mod tokens;
