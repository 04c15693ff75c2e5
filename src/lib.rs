//! # Introduction
//!
//! sprig is the front end of a small imperative, C-like scripting language.
//! It turns source text into a typed abstract syntax tree that an interpreter
//! or compiler backend can consume.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Tokenizer → Parser → AST → (JSON | outline | TUI)
//! ```
//!
//! 1. [`parser`] — the tokenizer, the recursive descent parser and the AST.
//!    The parser pulls tokens one at a time; nothing is buffered beyond a
//!    single lookahead token.
//! 2. [`outline`] — flattens a [`Program`](parser::ast::Program) into labelled,
//!    indented rows for text output and the browser.
//! 3. [`ui`] — ratatui-based AST browser; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sprig::parser::ast::{Expression, Statement};
//!
//! let program = sprig::parse("x = 34;").unwrap();
//! assert!(matches!(
//!     &program.body[0],
//!     Statement::Expression { expression: Expression::Assignment { .. } }
//! ));
//! ```

pub mod outline;
pub mod parser;
pub mod ui;

pub use parser::{parse, ParseError, Parser};
