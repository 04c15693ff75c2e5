//! Source parser
//!
//! This module transforms sprig source text into an Abstract Syntax Tree (AST):
//! - [`tokenizer`]: Tokenization (source text → tokens, on demand)
//! - [`parse`]: Parser entry point, error type, and lookahead handling
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! A small C-like scripting language:
//! - Literals: integers, single- or double-quoted strings, `true`, `false`, `null`
//! - Declarations: `int a = 1, b;`
//! - Statements: blocks, `if`/`else`, `while`, `do`-`while`, `for`, empty `;`
//! - Expressions: assignment (`=`, `+=`, ...), `||`, `&&`, equality,
//!   relational, additive, multiplicative, and prefix `+ - !`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! The first error aborts the parse; there is no recovery.

pub mod ast;
mod expressions;
pub mod parse;
mod statements;
pub mod tokenizer;

pub use parse::{parse, ParseError, ParseResult, Parser};
pub use tokenizer::{LexError, Token, TokenKind, Tokenizer};
