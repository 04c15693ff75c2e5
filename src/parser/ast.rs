// AST (Abstract Syntax Tree) definitions for the sprig front end
//
// Every node serializes to an object tagged with a `"type"` field naming the
// node, e.g. `{"type": "NumericLiteral", "value": 42.0}`.

use serde::Serialize;
use std::fmt;

/// Assignment operators (`=` and the compound forms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    // Arithmetic
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    // Comparison
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

/// Short-circuiting logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

/// Prefix unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "+")]
    Plus, // +x
    #[serde(rename = "-")]
    Neg, // -x
    #[serde(rename = "!")]
    Not, // !x
}

impl AssignmentOperator {
    /// Map operator source text to an operator, if it is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(AssignmentOperator::Assign),
            "+=" => Some(AssignmentOperator::AddAssign),
            "-=" => Some(AssignmentOperator::SubAssign),
            "*=" => Some(AssignmentOperator::MulAssign),
            "/=" => Some(AssignmentOperator::DivAssign),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
        }
    }
}

impl BinaryOperator {
    /// Map operator source text to an operator, if it is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            "==" => Some(BinaryOperator::Eq),
            "!=" => Some(BinaryOperator::Ne),
            "<" => Some(BinaryOperator::Lt),
            "<=" => Some(BinaryOperator::Le),
            ">" => Some(BinaryOperator::Gt),
            ">=" => Some(BinaryOperator::Ge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
        }
    }
}

impl LogicalOperator {
    /// Map operator source text to an operator, if it is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&&" => Some(LogicalOperator::And),
            "||" => Some(LogicalOperator::Or),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

impl UnaryOperator {
    /// Map operator source text to an operator, if it is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(UnaryOperator::Plus),
            "-" => Some(UnaryOperator::Neg),
            "!" => Some(UnaryOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Neg => "-",
            UnaryOperator::Not => "!",
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bare name. Also the only valid assignment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// One `name [= initializer]` entry of an `int` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub initializer: Option<Expression>,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    NumericLiteral {
        value: f64,
    },
    StringLiteral {
        value: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
    #[serde(rename = "AssignmentExpression")]
    Assignment {
        operator: AssignmentOperator,
        left: Identifier,
        right: Box<Expression>,
    },
    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    #[serde(rename = "LogicalExpression")]
    Logical {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    #[serde(rename = "UnaryExpression")]
    Unary {
        operator: UnaryOperator,
        argument: Box<Expression>,
    },
    // Identifier carries its own tag
    #[serde(untagged)]
    Identifier(Identifier),
}

impl Expression {
    /// Node name as it appears in the serialized tree
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::NumericLiteral { .. } => "NumericLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::BooleanLiteral { .. } => "BooleanLiteral",
            Expression::NullLiteral => "NullLiteral",
            Expression::Assignment { .. } => "AssignmentExpression",
            Expression::Binary { .. } => "BinaryExpression",
            Expression::Logical { .. } => "LogicalExpression",
            Expression::Unary { .. } => "UnaryExpression",
            Expression::Identifier(_) => "Identifier",
        }
    }
}

/// Initializer clause of a `for` statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ForInit {
    #[serde(rename = "VariableDeclarationStatement")]
    VariableDeclaration {
        declarations: Vec<VariableDeclaration>,
    },
    #[serde(untagged)]
    Expression(Expression),
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "ExpressionStatement")]
    Expression { expression: Expression },
    #[serde(rename = "EmptyStatement")]
    Empty,
    #[serde(rename = "BlockStatement")]
    Block { body: Vec<Statement> },
    #[serde(rename = "VariableDeclarationStatement")]
    VariableDeclaration {
        declarations: Vec<VariableDeclaration>,
    },
    #[serde(rename = "IfStatement")]
    If {
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    #[serde(rename = "WhileStatement")]
    While {
        test: Expression,
        consequent: Box<Statement>,
    },
    #[serde(rename = "DoWhileStatement")]
    DoWhile {
        body: Box<Statement>,
        test: Expression,
    },
    #[serde(rename = "ForStatement")]
    For {
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },
}

impl Statement {
    /// Node name as it appears in the serialized tree
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Expression { .. } => "ExpressionStatement",
            Statement::Empty => "EmptyStatement",
            Statement::Block { .. } => "BlockStatement",
            Statement::VariableDeclaration { .. } => "VariableDeclarationStatement",
            Statement::If { .. } => "IfStatement",
            Statement::While { .. } => "WhileStatement",
            Statement::DoWhile { .. } => "DoWhileStatement",
            Statement::For { .. } => "ForStatement",
        }
    }
}

/// Root of the tree; `body` always holds at least one statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Statement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(BinaryOperator::from_symbol(">="), Some(BinaryOperator::Ge));
        assert_eq!(BinaryOperator::from_symbol("&&"), None);
        assert_eq!(LogicalOperator::from_symbol("||"), Some(LogicalOperator::Or));
        assert_eq!(
            AssignmentOperator::from_symbol("*="),
            Some(AssignmentOperator::MulAssign)
        );
        assert_eq!(UnaryOperator::Not.to_string(), "!");
    }

    #[test]
    fn test_serialized_shape() {
        let program = Program {
            body: vec![Statement::Expression {
                expression: Expression::Assignment {
                    operator: AssignmentOperator::AddAssign,
                    left: Identifier::new("x"),
                    right: Box::new(Expression::NullLiteral),
                },
            }],
        };

        let value = serde_json::to_value(&program).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Program",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "+=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": { "type": "NullLiteral" }
                    }
                }]
            })
        );
    }

    #[test]
    fn test_identifier_expression_tagged_once() {
        let expr = Expression::Identifier(Identifier::new("count"));
        let value = serde_json::to_value(&expr).unwrap();
        assert_eq!(value, json!({ "type": "Identifier", "name": "count" }));
        assert_eq!(expr.kind(), "Identifier");
    }

    #[test]
    fn test_for_init_shapes() {
        let decl = ForInit::VariableDeclaration {
            declarations: vec![VariableDeclaration {
                id: Identifier::new("i"),
                initializer: None,
            }],
        };
        assert_eq!(
            serde_json::to_value(&decl).unwrap(),
            json!({
                "type": "VariableDeclarationStatement",
                "declarations": [{
                    "type": "VariableDeclaration",
                    "id": { "type": "Identifier", "name": "i" },
                    "initializer": null
                }]
            })
        );

        let expr = ForInit::Expression(Expression::BooleanLiteral { value: true });
        assert_eq!(
            serde_json::to_value(&expr).unwrap(),
            json!({ "type": "BooleanLiteral", "value": true })
        );
    }
}
