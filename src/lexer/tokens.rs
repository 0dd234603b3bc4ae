use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,

    Plus,        // +
    Minus,       // -
    Asterisk,    // *
    Slash,       // /
    Exclamation, // !
    Caret,       // ^

    OpenParen,
    CloseParen,
    Semicolon,
}

impl TokenKind {
    /// Source text of fixed-text kinds; `None` for `Integer` and `EOF`.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::EOF | TokenKind::Integer => None,
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Exclamation => Some("!"),
            TokenKind::Caret => Some("^"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Semicolon => Some(";"),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Integer => write!(f, "{} ({})", self.kind, self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}
