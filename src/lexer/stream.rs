//! Forward-only cursor over a lexed token vector.

use std::rc::Rc;

use crate::{Position, Span};

use super::tokens::{Token, TokenKind};

/// A forward-only view over tokens produced by the lexer.
///
/// The last token is always `EOF`; the cursor never moves past it, so
/// `current()` is always valid. The stream is released exactly once by
/// consuming it with [`TokenStream::release`].
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps `tokens`, appending an `EOF` token if the vector does not end
    /// with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let offset = tokens.last().map_or(0, |token| token.span.end.0);
            let position = Position(offset, file);

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: position.clone(),
                    end: position,
                },
            });
        }

        TokenStream { tokens, pos: 0 }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn current_literal(&self) -> &str {
        &self.current().value
    }

    /// Returns true once the cursor rests on `EOF`.
    pub fn is_exhausted(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }

    /// Consumes the current token and returns it. At `EOF` the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_exhausted() {
            self.pos += 1;
        }
        token
    }

    /// Kind of the most recently consumed token.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos.checked_sub(1).map(|pos| self.tokens[pos].kind)
    }

    /// Start position of the current token.
    pub fn position(&self) -> Position {
        self.current().span.start.clone()
    }

    /// Releases the stream. Returns the number of tokens consumed.
    pub fn release(self) -> usize {
        tracing::debug!(
            consumed = self.pos,
            remaining = self.tokens.len() - self.pos - 1,
            "token stream released"
        );
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::lexer::{lexer::tokenize, tokens::TokenKind};

    use super::TokenStream;

    fn stream(source: &str) -> TokenStream {
        let tokens = tokenize(source.to_string(), None).unwrap();
        TokenStream::new(tokens, Rc::new("shell".to_string()))
    }

    #[test]
    fn test_stream_walks_tokens_in_order() {
        let mut stream = stream("12 + 3");

        assert_eq!(stream.current_kind(), TokenKind::Integer);
        assert_eq!(stream.current_literal(), "12");
        assert_eq!(stream.previous_kind(), None);

        assert_eq!(stream.advance().value, "12");
        assert_eq!(stream.current_kind(), TokenKind::Plus);
        assert_eq!(stream.previous_kind(), Some(TokenKind::Integer));
        assert_eq!(stream.position().0, 3);

        stream.advance();
        assert!(!stream.is_exhausted());
        stream.advance();
        assert!(stream.is_exhausted());
        assert_eq!(stream.release(), 3);
    }

    #[test]
    fn test_stream_stays_on_eof() {
        let mut stream = stream("7");
        stream.advance();

        let eof = stream.advance();
        assert_eq!(eof.kind, TokenKind::EOF);
        assert!(stream.is_exhausted());
        assert_eq!(stream.position().0, 1);
    }

    #[test]
    fn test_stream_appends_missing_eof() {
        let mut tokens = tokenize("4".to_string(), None).unwrap();
        tokens.pop();

        let stream = TokenStream::new(tokens, Rc::new("shell".to_string()));
        assert_eq!(stream.current_kind(), TokenKind::Integer);
        assert_eq!(stream.tokens.len(), 2);
        assert_eq!(stream.tokens[1].span.start.0, 1);

        let empty = TokenStream::new(vec![], Rc::new("shell".to_string()));
        assert!(empty.is_exhausted());
    }
}
