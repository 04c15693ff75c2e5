//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, the `eat` consumption primitive, and the main
//! parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a single-lookahead recursive descent parser:
//! - This module: Parser struct, lookahead handling, and the `Program` production
//! - `statements`: statement productions (blocks, declarations, `if`, loops)
//! - `expressions`: expression productions and the generic binary chain
//!
//! Tokens are pulled from the [`Tokenizer`] one at a time as productions
//! consume them; no token list is built up front.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::tokenizer::{LexError, Token, TokenKind, Tokenizer};
use thiserror::Error;
use tracing::debug;

/// Parser error type. Every variant is fatal to the current parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized character '{character}' at offset {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },

    #[error("Unexpected token '{found}' ({kind}), expected {expected}")]
    UnexpectedToken {
        found: String,
        kind: TokenKind,
        expected: TokenKind,
    },

    #[error("Invalid left-hand side in assignment: {target}")]
    InvalidAssignmentTarget { target: &'static str },

    #[error("Unexpected literal production: {found}")]
    NoMatchingLiteralProduction { found: String },
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnrecognizedCharacter {
                character,
                position,
            } => ParseError::UnrecognizedCharacter {
                character,
                position,
            },
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser with one token of lookahead
#[derive(Debug, Default)]
pub struct Parser {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) lookahead: Option<Token>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` into a [`Program`].
    ///
    /// All state from a previous call is discarded first.
    pub fn parse(&mut self, source: &str) -> ParseResult<Program> {
        debug!(bytes = source.len(), "parsing program");

        self.tokenizer.initialize(source);
        self.lookahead = self.tokenizer.next_token()?;

        let program = self.parse_program()?;
        debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }

    /// Program := StatementList(end of input)
    fn parse_program(&mut self) -> ParseResult<Program> {
        let body = self.parse_statement_list(None)?;
        Ok(Program { body })
    }

    // ===== Helper methods =====

    /// Kind of the lookahead token, `None` at end of input
    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consume the lookahead if it is of `expected` kind and pull the next
    /// token; otherwise fail without consuming anything.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        match self.lookahead.take() {
            None => Err(ParseError::UnexpectedEndOfInput { expected }),
            Some(token) if token.kind != expected => {
                let err = ParseError::UnexpectedToken {
                    found: token.text.clone(),
                    kind: token.kind,
                    expected,
                };
                self.lookahead = Some(token);
                Err(err)
            }
            Some(token) => {
                self.lookahead = self.tokenizer.next_token()?;
                Ok(token)
            }
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(Identifier::new(token.text))
    }
}

/// Parse `source` with a fresh [`Parser`].
pub fn parse(source: &str) -> ParseResult<Program> {
    Parser::new().parse(source)
}
