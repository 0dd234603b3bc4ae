//! Error types for lexing and parsing.
//!
//! This module defines the error types used throughout the crate:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer and the expression parser
//! - Helpful error messages and suggestions

pub mod errors;
