//! Statement parsing implementation
//!
//! This module handles parsing of all statement types:
//!
//! - Variable declarations: `int x = 42, y;`
//! - Control flow: `if`/`else`, `while`, `do`-`while`, `for`
//! - Blocks: `{ ... }`
//! - Empty statements: `;`
//! - Expression statements: `x = y + 1;`
//!
//! # Grammar
//!
//! ```text
//! statement_list(stop) ::= statement { statement }
//! statement  ::= block | ';' | var_decl_stmt | if_stmt
//!              | while_stmt | do_while_stmt | for_stmt | expr ';'
//! block      ::= '{' [ statement_list('}') ] '}'
//! var_decl_stmt ::= 'int' var_decl { ',' var_decl } ';'
//! var_decl   ::= identifier [ '=' assignment ]
//! if_stmt    ::= 'if' '(' expr ')' block [ 'else' block ]
//! while_stmt ::= 'while' '(' expr ')' block
//! do_while_stmt ::= 'do' block 'while' '(' expr ')'
//! for_stmt   ::= 'for' '(' [ for_init ] ';' [ expr ] ';' [ expr ] ')' block
//! for_init   ::= 'int' var_decl { ',' var_decl } | expr
//! ```
//!
//! Controlled bodies are always braced blocks; there is no single-statement
//! form.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseResult, Parser};
use crate::parser::tokenizer::TokenKind;

impl Parser {
    /// Parse one or more statements, stopping before `stop` or at end of
    /// input. `None` means run to end of input.
    pub(crate) fn parse_statement_list(
        &mut self,
        stop: Option<TokenKind>,
    ) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];

        while let Some(kind) = self.peek_kind() {
            if Some(kind) == stop {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek_kind() {
            Some(TokenKind::Semicolon) => self.parse_empty_statement(),
            Some(TokenKind::LBrace) => self.parse_block_statement(),
            Some(TokenKind::Int) => self.parse_variable_statement(),
            Some(TokenKind::If) => self.parse_if_statement(),
            Some(TokenKind::While) => self.parse_while_statement(),
            Some(TokenKind::Do) => self.parse_do_while_statement(),
            Some(TokenKind::For) => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_empty_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::Empty)
    }

    /// Parse a braced block; `{}` yields an empty body
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::LBrace)?;

        // At end of input report the missing '}' rather than a statement
        let body = if self.check(TokenKind::RBrace) || self.lookahead.is_none() {
            Vec::new()
        } else {
            self.parse_statement_list(Some(TokenKind::RBrace))?
        };

        self.eat(TokenKind::RBrace)?;
        Ok(Statement::Block { body })
    }

    /// Parse `int a = 1, b;`
    fn parse_variable_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Int)?;
        let declarations = self.parse_variable_declaration_list()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::VariableDeclaration { declarations })
    }

    fn parse_variable_declaration_list(
        &mut self,
    ) -> ParseResult<Vec<VariableDeclaration>> {
        let mut declarations = vec![self.parse_variable_declaration()?];

        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            declarations.push(self.parse_variable_declaration()?);
        }

        Ok(declarations)
    }

    /// Parse `name` or `name = initializer`
    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let id = self.expect_identifier()?;

        // Anything other than a separator must be an initializer
        let initializer = match self.peek_kind() {
            Some(TokenKind::Semicolon) | Some(TokenKind::Comma) => None,
            _ => {
                self.eat(TokenKind::SimpleAssignment)?;
                Some(self.parse_assignment()?)
            }
        };

        Ok(VariableDeclaration { id, initializer })
    }

    /// Parse `if (test) { ... } [else { ... }]`
    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::If)?;
        let test = self.parse_condition()?;
        let consequent = Box::new(self.parse_block_statement()?);

        let alternate = if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else)?;
            Some(Box::new(self.parse_block_statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            test,
            consequent,
            alternate,
        })
    }

    /// Parse `while (test) { ... }`
    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::While)?;
        let test = self.parse_condition()?;
        let consequent = Box::new(self.parse_block_statement()?);

        Ok(Statement::While { test, consequent })
    }

    /// Parse `do { ... } while (test)`
    fn parse_do_while_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Do)?;
        let body = Box::new(self.parse_block_statement()?);
        self.eat(TokenKind::While)?;
        let test = self.parse_condition()?;

        Ok(Statement::DoWhile { body, test })
    }

    /// Parse `for (init; test; update) { ... }`, every clause optional
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_for_init()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.eat(TokenKind::RParen)?;

        let body = Box::new(self.parse_block_statement()?);

        Ok(Statement::For {
            init,
            test,
            update,
            body,
        })
    }

    fn parse_for_init(&mut self) -> ParseResult<ForInit> {
        if self.check(TokenKind::Int) {
            self.eat(TokenKind::Int)?;
            let declarations = self.parse_variable_declaration_list()?;
            return Ok(ForInit::VariableDeclaration { declarations });
        }

        Ok(ForInit::Expression(self.parse_expression()?))
    }

    /// Parse `expr ;`
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::Expression { expression })
    }

    /// Parse a parenthesized loop or branch condition
    fn parse_condition(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.eat(TokenKind::RParen)?;
        Ok(test)
    }
}
