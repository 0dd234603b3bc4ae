use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingPrecedence { .. } => "MissingPrecedence",
            ErrorImpl::MissingParseRoutine { .. } => "MissingParseRoutine",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingPrecedence { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot continue an expression",
                describe(*kind)
            )),
            ErrorImpl::MissingParseRoutine { kind, position } => match position {
                Denotation::Prefix => ErrorTip::Suggestion(format!(
                    "`{}` cannot start an expression",
                    describe(*kind)
                )),
                Denotation::Infix => ErrorTip::Suggestion(format!(
                    "`{}` cannot follow an operand, is an operator missing?",
                    describe(*kind)
                )),
            },
            ErrorImpl::UnexpectedEndOfInput { after: Some(kind) } => ErrorTip::Suggestion(
                format!("Expected an operand after `{}`", describe(*kind)),
            ),
            ErrorImpl::UnexpectedEndOfInput { after: None } => {
                ErrorTip::Suggestion(String::from("Expected an expression, found empty input"))
            }
            ErrorImpl::UnexpectedToken { kind } => {
                ErrorTip::Suggestion(format!("`{}` is not an operator", describe(*kind)))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels, split it up",
                limit
            )),
        }
    }
}

fn describe(kind: TokenKind) -> String {
    kind.symbol().map_or_else(|| kind.to_string(), String::from)
}

fn end_of_input_context(after: &Option<TokenKind>) -> String {
    match after {
        Some(kind) => format!(" after {}", kind),
        None => String::new(),
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Which side of the parse function registry a lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denotation {
    /// The token starts an expression.
    Prefix,
    /// The token continues an expression that already has a left operand.
    Infix,
}

impl Display for Denotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denotation::Prefix => write!(f, "prefix"),
            Denotation::Infix => write!(f, "infix"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("no binding power defined for {kind}")]
    MissingPrecedence { kind: TokenKind },
    #[error("no {position} parse routine for {kind}")]
    MissingParseRoutine { kind: TokenKind, position: Denotation },
    #[error("unexpected end of input{}", end_of_input_context(.after))]
    UnexpectedEndOfInput { after: Option<TokenKind> },
    #[error("unexpected token: {kind}")]
    UnexpectedToken { kind: TokenKind },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
