//! Expression parsing implementation
//!
//! This module handles parsing of expressions by recursive descent, one
//! method per precedence level.
//!
//! # Precedence
//!
//! From loosest to tightest binding:
//!
//! | Level          | Operators                | Associativity |
//! |----------------|--------------------------|---------------|
//! | assignment     | `=` `+=` `-=` `*=` `/=`  | right         |
//! | logical or     | `\|\|`                   | left          |
//! | logical and    | `&&`                     | left          |
//! | equality       | `==` `!=`                | left          |
//! | relational     | `<` `>` `<=` `>=`        | left          |
//! | additive       | `+` `-`                  | left          |
//! | multiplicative | `*` `/`                  | left          |
//! | unary          | `+` `-` `!` (prefix)     | right         |
//!
//! Every left-associative level is an instance of [`Parser::parse_left_chain`],
//! parameterized by the operand production and the operator token kind.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, ParseResult, Parser};
use crate::parser::tokenizer::{Token, TokenKind};

/// A production that parses one operand of a binary chain
type Operand = fn(&mut Parser) -> ParseResult<Expression>;

/// Builds the node for `left <op> right`
type Combine = fn(&Token, Expression, Expression) -> ParseResult<Expression>;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    ///
    /// The target is checked as soon as the operator is seen, before the
    /// right-hand side is parsed.
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Expression> {
        let left = self.parse_logical_or()?;

        let Some(kind) = self.peek_kind().filter(|kind| kind.is_assignment()) else {
            return Ok(left);
        };

        let token = self.eat(kind)?;
        let operator = AssignmentOperator::from_symbol(&token.text)
            .ok_or_else(|| unexpected(&token, kind))?;

        let target = match left {
            Expression::Identifier(target) => target,
            other => {
                return Err(ParseError::InvalidAssignmentTarget {
                    target: other.kind(),
                })
            }
        };

        let right = Box::new(self.parse_assignment()?);
        Ok(Expression::Assignment {
            operator,
            left: target,
            right,
        })
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(Self::parse_logical_and, TokenKind::LogicalOr, logical)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(Self::parse_equality, TokenKind::LogicalAnd, logical)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(Self::parse_relational, TokenKind::Equality, binary)
    }

    /// Parse relational (< > <= >=)
    fn parse_relational(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(Self::parse_additive, TokenKind::Relational, binary)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(
            Self::parse_multiplicative,
            TokenKind::Additive,
            binary,
        )
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        self.parse_left_chain(Self::parse_unary, TokenKind::Multiplicative, binary)
    }

    /// Parse `operand { op operand }`, folding to the left.
    fn parse_left_chain(
        &mut self,
        operand: Operand,
        operator: TokenKind,
        combine: Combine,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;

        while self.check(operator) {
            let token = self.eat(operator)?;
            let right = operand(self)?;
            left = combine(&token, left, right)?;
        }

        Ok(left)
    }

    /// Parse unary (+ - !)
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let kind = match self.peek_kind() {
            Some(kind @ (TokenKind::Additive | TokenKind::LogicalNot)) => kind,
            _ => return self.parse_primary(),
        };

        let token = self.eat(kind)?;
        let operator =
            UnaryOperator::from_symbol(&token.text).ok_or_else(|| unexpected(&token, kind))?;
        let argument = Box::new(self.parse_unary()?);

        Ok(Expression::Unary { operator, argument })
    }

    /// Parse primary (literals, parenthesized expressions, identifiers)
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.peek_kind() {
            Some(kind) if kind.is_literal() => self.parse_literal(),
            Some(TokenKind::LParen) => {
                self.eat(TokenKind::LParen)?;
                let expr = self.parse_expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Ok(Expression::Identifier(self.expect_identifier()?)),
        }
    }

    /// Parse a literal (number, string, true, false, null)
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Expression> {
        let Some(kind) = self.peek_kind() else {
            return Err(ParseError::NoMatchingLiteralProduction {
                found: "end of input".to_string(),
            });
        };

        match kind {
            TokenKind::Number => {
                let token = self.eat(kind)?;
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| unexpected(&token, kind))?;
                Ok(Expression::NumericLiteral { value })
            }
            TokenKind::String => {
                let token = self.eat(kind)?;
                // Quotes are single ASCII bytes at both ends
                let value = token.text[1..token.text.len() - 1].to_string();
                Ok(Expression::StringLiteral { value })
            }
            TokenKind::True | TokenKind::False => {
                self.eat(kind)?;
                Ok(Expression::BooleanLiteral {
                    value: kind == TokenKind::True,
                })
            }
            TokenKind::Null => {
                self.eat(kind)?;
                Ok(Expression::NullLiteral)
            }
            _ => Err(ParseError::NoMatchingLiteralProduction {
                found: self
                    .lookahead
                    .as_ref()
                    .map(|token| token.text.clone())
                    .unwrap_or_default(),
            }),
        }
    }
}

fn binary(token: &Token, left: Expression, right: Expression) -> ParseResult<Expression> {
    let operator =
        BinaryOperator::from_symbol(&token.text).ok_or_else(|| unexpected(token, token.kind))?;
    Ok(Expression::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn logical(token: &Token, left: Expression, right: Expression) -> ParseResult<Expression> {
    let operator =
        LogicalOperator::from_symbol(&token.text).ok_or_else(|| unexpected(token, token.kind))?;
    Ok(Expression::Logical {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Error for a token whose text does not spell an operator of its class
fn unexpected(token: &Token, expected: TokenKind) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.text.clone(),
        kind: token.kind,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    fn expr(source: &str) -> Expression {
        let program = parse(source).unwrap();
        match program.body.into_iter().next() {
            Some(Statement::Expression { expression }) => expression,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    fn num(value: f64) -> Box<Expression> {
        Box::new(Expression::NumericLiteral { value })
    }

    fn ident(name: &str) -> Box<Expression> {
        Box::new(Expression::Identifier(Identifier::new(name)))
    }

    #[test]
    fn test_additive_is_left_associative() {
        assert_eq!(
            expr("a + b - c;"),
            Expression::Binary {
                operator: BinaryOperator::Sub,
                left: Box::new(Expression::Binary {
                    operator: BinaryOperator::Add,
                    left: ident("a"),
                    right: ident("b"),
                }),
                right: ident("c"),
            }
        );
    }

    #[test]
    fn test_assignment_is_right_associative() {
        assert_eq!(
            expr("a = b = c;"),
            Expression::Assignment {
                operator: AssignmentOperator::Assign,
                left: Identifier::new("a"),
                right: Box::new(Expression::Assignment {
                    operator: AssignmentOperator::Assign,
                    left: Identifier::new("b"),
                    right: ident("c"),
                }),
            }
        );
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            expr("2 + 3 * 4;"),
            Expression::Binary {
                operator: BinaryOperator::Add,
                left: num(2.0),
                right: Box::new(Expression::Binary {
                    operator: BinaryOperator::Mul,
                    left: num(3.0),
                    right: num(4.0),
                }),
            }
        );
    }

    #[test]
    fn test_logical_precedence() {
        // x == true && y  =>  (x == true) && y
        match expr("x == true && y;") {
            Expression::Logical {
                operator: LogicalOperator::And,
                left,
                right,
            } => {
                assert!(matches!(
                    *left,
                    Expression::Binary {
                        operator: BinaryOperator::Eq,
                        ..
                    }
                ));
                assert_eq!(right, ident("y"));
            }
            other => panic!("Expected logical expression, got {:?}", other),
        }

        // a || b && c  =>  a || (b && c)
        match expr("a || b && c;") {
            Expression::Logical {
                operator: LogicalOperator::Or,
                right,
                ..
            } => assert!(matches!(
                *right,
                Expression::Logical {
                    operator: LogicalOperator::And,
                    ..
                }
            )),
            other => panic!("Expected logical expression, got {:?}", other),
        }
    }

    #[test]
    fn test_relational_below_additive() {
        match expr("a + 1 >= b;") {
            Expression::Binary {
                operator: BinaryOperator::Ge,
                left,
                ..
            } => assert!(matches!(*left, Expression::Binary { .. })),
            other => panic!("Expected relational expression, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(
            expr("-!x;"),
            Expression::Unary {
                operator: UnaryOperator::Neg,
                argument: Box::new(Expression::Unary {
                    operator: UnaryOperator::Not,
                    argument: ident("x"),
                }),
            }
        );

        match expr("-a * b;") {
            Expression::Binary {
                operator: BinaryOperator::Mul,
                left,
                ..
            } => assert!(matches!(
                *left,
                Expression::Unary {
                    operator: UnaryOperator::Neg,
                    ..
                }
            )),
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(expr("true;"), Expression::BooleanLiteral { value: true });
        assert_eq!(expr("false;"), Expression::BooleanLiteral { value: false });
        assert_eq!(expr("null;"), Expression::NullLiteral);
        assert_eq!(
            expr("\"hello\";"),
            Expression::StringLiteral {
                value: "hello".to_string()
            }
        );
        assert_eq!(
            expr("'hello';"),
            Expression::StringLiteral {
                value: "hello".to_string()
            }
        );
        assert_eq!(
            expr("'';"),
            Expression::StringLiteral {
                value: String::new()
            }
        );
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(
            expr("total /= 2;"),
            Expression::Assignment {
                operator: AssignmentOperator::DivAssign,
                left: Identifier::new("total"),
                right: num(2.0),
            }
        );
    }

    #[test]
    fn test_parenthesized_target_is_identifier() {
        assert!(matches!(expr("(x) = 1;"), Expression::Assignment { .. }));
    }

    #[test]
    fn test_invalid_assignment_targets() {
        assert_eq!(
            parse("1 = 2;").unwrap_err(),
            ParseError::InvalidAssignmentTarget {
                target: "NumericLiteral"
            }
        );
        assert_eq!(
            parse("a + b = c;").unwrap_err(),
            ParseError::InvalidAssignmentTarget {
                target: "BinaryExpression"
            }
        );
        // Rejected before the right-hand side is looked at
        assert_eq!(
            parse("'s' +=").unwrap_err(),
            ParseError::InvalidAssignmentTarget {
                target: "StringLiteral"
            }
        );
    }

    #[test]
    fn test_dangling_unary() {
        assert_eq!(
            parse("+;").unwrap_err(),
            ParseError::UnexpectedToken {
                found: ";".to_string(),
                kind: TokenKind::Semicolon,
                expected: TokenKind::Identifier,
            }
        );
    }

    #[test]
    fn test_literal_without_literal_token() {
        let mut parser = Parser::new();
        parser.tokenizer.initialize("x");
        parser.lookahead = parser.tokenizer.next_token().unwrap();

        assert_eq!(
            parser.parse_literal().unwrap_err(),
            ParseError::NoMatchingLiteralProduction {
                found: "x".to_string()
            }
        );

        parser.tokenizer.initialize("");
        parser.lookahead = None;
        assert!(matches!(
            parser.parse_literal(),
            Err(ParseError::NoMatchingLiteralProduction { .. })
        ));
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(
            parse("(1 + 2;").unwrap_err(),
            ParseError::UnexpectedToken {
                found: ";".to_string(),
                kind: TokenKind::Semicolon,
                expected: TokenKind::RParen,
            }
        );
    }
}
