// Integration tests for the sprig front end

use serde_json::json;
use sprig::parser::ast::*;
use sprig::parser::{parse, ParseError, Parser, TokenKind};
use std::fs;
use std::path::Path;

fn first_statement(source: &str) -> Statement {
    let program = parse(source).expect("Parsing failed");
    program.body.into_iter().next().expect("Program is never empty")
}

#[test]
fn test_numeric_statement() {
    let program = parse("42;").expect("Parsing failed");

    assert_eq!(
        program,
        Program {
            body: vec![Statement::Expression {
                expression: Expression::NumericLiteral { value: 42.0 },
            }],
        }
    );
}

#[test]
fn test_simple_assignment() {
    assert_eq!(
        first_statement("x = 34;"),
        Statement::Expression {
            expression: Expression::Assignment {
                operator: AssignmentOperator::Assign,
                left: Identifier::new("x"),
                right: Box::new(Expression::NumericLiteral { value: 34.0 }),
            },
        }
    );
}

#[test]
fn test_parenthesized_grouping() {
    let statement = first_statement("(42+1)*7;");

    let Statement::Expression { expression } = statement else {
        panic!("Expected expression statement");
    };
    assert_eq!(
        expression,
        Expression::Binary {
            operator: BinaryOperator::Mul,
            left: Box::new(Expression::Binary {
                operator: BinaryOperator::Add,
                left: Box::new(Expression::NumericLiteral { value: 42.0 }),
                right: Box::new(Expression::NumericLiteral { value: 1.0 }),
            }),
            right: Box::new(Expression::NumericLiteral { value: 7.0 }),
        }
    );
}

#[test]
fn test_variable_declaration() {
    assert_eq!(
        first_statement("int z = 9;"),
        Statement::VariableDeclaration {
            declarations: vec![VariableDeclaration {
                id: Identifier::new("z"),
                initializer: Some(Expression::NumericLiteral { value: 9.0 }),
            }],
        }
    );
}

#[test]
fn test_if_else_with_blocks() {
    let statement = first_statement("if(x==true){int y=4;}else{int h=null;}");

    match statement {
        Statement::If {
            test,
            consequent,
            alternate,
        } => {
            assert!(matches!(
                test,
                Expression::Binary {
                    operator: BinaryOperator::Eq,
                    ..
                }
            ));

            for branch in [Some(consequent), alternate] {
                match branch.as_deref() {
                    Some(Statement::Block { body }) => {
                        assert_eq!(body.len(), 1);
                        assert!(matches!(body[0], Statement::VariableDeclaration { .. }));
                    }
                    other => panic!("Expected block branch, got {:?}", other),
                }
            }
        }
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_dangling_unary_plus() {
    assert!(matches!(
        parse("+;"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_assignment_to_literal_fails() {
    assert!(matches!(
        parse("1 = 2;"),
        Err(ParseError::InvalidAssignmentTarget { .. })
    ));
}

#[test]
fn test_quote_styles_agree() {
    assert_eq!(
        first_statement("\"hello\";"),
        first_statement("'hello';")
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = fs::read_to_string(Path::new("demos/control.sp"))
        .expect("Failed to read demo file");

    let first = parse(&source).expect("Parsing failed");
    let mut parser = Parser::new();
    let second = parser.parse(&source).expect("Parsing failed");
    let third = parser.parse(&source).expect("Parsing failed");

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_demo_files_parse() {
    let basics = fs::read_to_string(Path::new("demos/basics.sp"))
        .expect("Failed to read demo file");
    let program = parse(&basics).expect("Parsing failed");
    assert_eq!(program.body.len(), 6);

    let control = fs::read_to_string(Path::new("demos/control.sp"))
        .expect("Failed to read demo file");
    let program = parse(&control).expect("Parsing failed");

    let kinds: Vec<_> = program.body.iter().map(Statement::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "VariableDeclarationStatement",
            "ForStatement",
            "VariableDeclarationStatement",
            "WhileStatement",
            "DoWhileStatement",
            "VariableDeclarationStatement",
            "VariableDeclarationStatement",
        ]
    );
}

#[test]
fn test_json_shape() {
    let program = parse("int z = 9; z;").expect("Parsing failed");
    let value = serde_json::to_value(&program).expect("Serialization failed");

    assert_eq!(
        value,
        json!({
            "type": "Program",
            "body": [
                {
                    "type": "VariableDeclarationStatement",
                    "declarations": [{
                        "type": "VariableDeclaration",
                        "id": { "type": "Identifier", "name": "z" },
                        "initializer": { "type": "NumericLiteral", "value": 9.0 }
                    }]
                },
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "Identifier", "name": "z" }
                }
            ]
        })
    );
}

#[test]
fn test_json_for_statement() {
    let program = parse("for (;;) { x = !x; }").expect("Parsing failed");
    let value = serde_json::to_value(&program).expect("Serialization failed");

    assert_eq!(
        value["body"][0],
        json!({
            "type": "ForStatement",
            "init": null,
            "test": null,
            "update": null,
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AssignmentExpression",
                        "operator": "=",
                        "left": { "type": "Identifier", "name": "x" },
                        "right": {
                            "type": "UnaryExpression",
                            "operator": "!",
                            "argument": { "type": "Identifier", "name": "x" }
                        }
                    }
                }]
            }
        })
    );
}

#[test]
fn test_error_messages() {
    let err = parse("int 5;").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: "5".to_string(),
            kind: TokenKind::Number,
            expected: TokenKind::Identifier,
        }
    );
    assert_eq!(
        err.to_string(),
        "Unexpected token '5' (number), expected identifier"
    );

    let err = parse("x = $;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unrecognized character '$' at offset 4"
    );

    let err = parse("while (x) {").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected end of input, expected '}'");
}

#[test]
fn test_independent_parsers_in_parallel() {
    let sources = ["a = b = c;", "if (a) { } else { b; }", "for (;;) { }"];

    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || parse(&source))
        })
        .collect();

    for (handle, source) in handles.into_iter().zip(sources) {
        let threaded = handle.join().expect("Parser thread panicked");
        assert_eq!(threaded, parse(source));
    }
}
