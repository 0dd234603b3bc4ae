//! Parser state and entry points.
//!
//! The `Parser` owns the token stream and the grammar it was built with.
//! Expression routines in `expr` drive it through the accessors below.

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Denotation, Error, ErrorImpl},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, Grammar, LEDHandler, NUDHandler},
};

/// Deepest expression nesting a parse may reach before it is rejected with
/// `NestingTooDeep`. Every nested operand, folded operator and chained
/// postfix counts one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Cursor over the tokens being parsed
    stream: TokenStream,
    /// Precedence table and parse function registry
    grammar: Grammar,
    /// Nesting levels entered by the routines currently on the call stack
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `tokens`.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by the lexer
    /// * `file` - Name of the source the tokens came from
    /// * `grammar` - Lookup tables consulted on every parsing step
    pub fn new(tokens: Vec<Token>, file: Rc<String>, grammar: Grammar) -> Self {
        Parser {
            stream: TokenStream::new(tokens, file),
            grammar,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.stream.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.stream.current_kind()
    }

    /// Returns the literal text of the current token.
    pub fn current_literal(&self) -> &str {
        self.stream.current_literal()
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Token {
        self.stream.advance()
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        !self.stream.is_exhausted()
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.stream.position()
    }

    /// Looks up the binding power of `kind`.
    pub fn get_binding_power(&self, kind: TokenKind) -> Result<BindingPower, Error> {
        (self.grammar.binding_power_lookup)(kind)
            .ok_or_else(|| Error::new(ErrorImpl::MissingPrecedence { kind }, self.get_position()))
    }

    /// Looks up the null denotation (prefix) handler for `kind`.
    ///
    /// Fails with `UnexpectedEndOfInput` when the stream is exhausted, since a
    /// prefix routine is only ever requested where an operand is required.
    pub fn get_nud(&self, kind: TokenKind) -> Result<NUDHandler, Error> {
        if !self.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    after: self.stream.previous_kind(),
                },
                self.get_position(),
            ));
        }

        (self.grammar.nud_lookup)(kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::MissingParseRoutine {
                    kind,
                    position: Denotation::Prefix,
                },
                self.get_position(),
            )
        })
    }

    /// Looks up the left denotation (infix or postfix) handler for `kind`.
    pub fn get_led(&self, kind: TokenKind) -> Result<LEDHandler, Error> {
        (self.grammar.led_lookup)(kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::MissingParseRoutine {
                    kind,
                    position: Denotation::Infix,
                },
                self.get_position(),
            )
        })
    }

    /// Enters one more nesting level, failing once `MAX_NESTING_DEPTH` is
    /// passed.
    pub fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    /// Current nesting level.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Leaves every nesting level entered since `depth` was observed.
    pub fn unwind_to(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Parses one expression whose operators bind tighter than `floor`.
    pub fn parse(&mut self, floor: BindingPower) -> Result<Expr, Error> {
        parse_expr(self, floor)
    }

    /// Releases the underlying token stream. Returns the number of tokens
    /// consumed.
    pub fn close(self) -> usize {
        self.stream.release()
    }
}

/// Parses `tokens` as one arithmetic expression.
///
/// This is the main entry point for parsing: it uses [`Grammar::ARITHMETIC`]
/// and the lowest binding power as floor.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    parse_with(tokens, file, Grammar::ARITHMETIC, BindingPower::Default)
}

/// Parses `tokens` with an explicit grammar and precedence floor.
///
/// The token stream is released before returning, whether parsing
/// succeeded or not.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), floor = ?floor))]
pub fn parse_with(
    tokens: Vec<Token>,
    file: Rc<String>,
    grammar: Grammar,
    floor: BindingPower,
) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file, grammar);
    let result = parser.parse(floor);
    parser.close();

    match &result {
        Ok(expr) => tracing::debug!(depth = expr.depth(), "parsed expression"),
        Err(error) => tracing::debug!(%error, "parse failed"),
    }

    result
}
