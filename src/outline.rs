//! Flattened, indented view of a parsed [`Program`]
//!
//! Each node becomes one [`Row`]; child rows follow their parent at a greater
//! depth and carry the name of the field they hang off (`test`, `left`, ...).
//! The same rows back `--format tree` and the AST pane of the browser.

use crate::parser::ast::*;
use rustc_hash::FxHashSet;
use std::fmt::Write;

/// One line of the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub depth: usize,
    /// Field of the parent this node is stored in, if not a list element
    pub field: Option<&'static str>,
    /// Node type, e.g. `BinaryExpression`
    pub kind: &'static str,
    /// Operator, name or literal value shown after the kind
    pub detail: Option<String>,
    pub has_children: bool,
}

impl Row {
    /// Text of the row without indentation
    pub fn label(&self) -> String {
        let mut label = String::new();
        if let Some(field) = self.field {
            label.push_str(field);
            label.push_str(": ");
        }
        label.push_str(self.kind);
        if let Some(detail) = &self.detail {
            label.push(' ');
            label.push_str(detail);
        }
        label
    }
}

/// Flatten `program` into outline rows, parents before children
pub fn rows(program: &Program) -> Vec<Row> {
    let mut builder = Builder::default();
    builder.push(0, None, "Program", None);
    for statement in &program.body {
        builder.statement(1, None, statement);
    }
    builder.finish()
}

/// Render `program` as indented text, two spaces per level
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    for row in rows(program) {
        let _ = writeln!(out, "{:indent$}{}", "", row.label(), indent = row.depth * 2);
    }
    out
}

/// Indices of the rows left visible when the rows in `collapsed` hide their
/// descendants. Collapsed rows themselves stay visible.
pub fn visible(rows: &[Row], collapsed: &FxHashSet<usize>) -> Vec<usize> {
    let mut shown = Vec::with_capacity(rows.len());
    let mut hide_below: Option<usize> = None;

    for (index, row) in rows.iter().enumerate() {
        if let Some(depth) = hide_below {
            if row.depth > depth {
                continue;
            }
            hide_below = None;
        }

        shown.push(index);
        if collapsed.contains(&index) && row.has_children {
            hide_below = Some(row.depth);
        }
    }

    shown
}

#[derive(Default)]
struct Builder {
    rows: Vec<Row>,
}

impl Builder {
    fn push(
        &mut self,
        depth: usize,
        field: Option<&'static str>,
        kind: &'static str,
        detail: Option<String>,
    ) {
        self.rows.push(Row {
            depth,
            field,
            kind,
            detail,
            has_children: false,
        });
    }

    fn finish(mut self) -> Vec<Row> {
        for index in 1..self.rows.len() {
            if self.rows[index].depth > self.rows[index - 1].depth {
                self.rows[index - 1].has_children = true;
            }
        }
        self.rows
    }

    fn statement(&mut self, depth: usize, field: Option<&'static str>, statement: &Statement) {
        self.push(depth, field, statement.kind(), None);
        let depth = depth + 1;

        match statement {
            Statement::Expression { expression } => {
                self.expression(depth, Some("expression"), expression);
            }
            Statement::Empty => {}
            Statement::Block { body } => {
                for child in body {
                    self.statement(depth, None, child);
                }
            }
            Statement::VariableDeclaration { declarations } => {
                self.declarations(depth, declarations);
            }
            Statement::If {
                test,
                consequent,
                alternate,
            } => {
                self.expression(depth, Some("test"), test);
                self.statement(depth, Some("consequent"), consequent);
                if let Some(alternate) = alternate {
                    self.statement(depth, Some("alternate"), alternate);
                }
            }
            Statement::While { test, consequent } => {
                self.expression(depth, Some("test"), test);
                self.statement(depth, Some("consequent"), consequent);
            }
            Statement::DoWhile { body, test } => {
                self.statement(depth, Some("body"), body);
                self.expression(depth, Some("test"), test);
            }
            Statement::For {
                init,
                test,
                update,
                body,
            } => {
                match init {
                    Some(ForInit::VariableDeclaration { declarations }) => {
                        self.push(depth, Some("init"), "VariableDeclarationStatement", None);
                        self.declarations(depth + 1, declarations);
                    }
                    Some(ForInit::Expression(expression)) => {
                        self.expression(depth, Some("init"), expression);
                    }
                    None => {}
                }
                if let Some(test) = test {
                    self.expression(depth, Some("test"), test);
                }
                if let Some(update) = update {
                    self.expression(depth, Some("update"), update);
                }
                self.statement(depth, Some("body"), body);
            }
        }
    }

    fn declarations(&mut self, depth: usize, declarations: &[VariableDeclaration]) {
        for declaration in declarations {
            self.push(
                depth,
                None,
                "VariableDeclaration",
                Some(declaration.id.name.clone()),
            );
            if let Some(initializer) = &declaration.initializer {
                self.expression(depth + 1, Some("initializer"), initializer);
            }
        }
    }

    fn expression(&mut self, depth: usize, field: Option<&'static str>, expression: &Expression) {
        let detail = match expression {
            Expression::NumericLiteral { value } => Some(value.to_string()),
            Expression::StringLiteral { value } => Some(format!("{value:?}")),
            Expression::BooleanLiteral { value } => Some(value.to_string()),
            Expression::NullLiteral => None,
            Expression::Identifier(id) => Some(id.name.clone()),
            Expression::Assignment { operator, .. } => Some(operator.to_string()),
            Expression::Binary { operator, .. } => Some(operator.to_string()),
            Expression::Logical { operator, .. } => Some(operator.to_string()),
            Expression::Unary { operator, .. } => Some(operator.to_string()),
        };
        self.push(depth, field, expression.kind(), detail);
        let depth = depth + 1;

        match expression {
            Expression::Assignment { left, right, .. } => {
                self.push(depth, Some("left"), "Identifier", Some(left.name.clone()));
                self.expression(depth, Some("right"), right);
            }
            Expression::Binary { left, right, .. } | Expression::Logical { left, right, .. } => {
                self.expression(depth, Some("left"), left);
                self.expression(depth, Some("right"), right);
            }
            Expression::Unary { argument, .. } => {
                self.expression(depth, Some("argument"), argument);
            }
            _ => {}
        }
    }
}
