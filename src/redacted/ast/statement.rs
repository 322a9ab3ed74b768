//! Statements and blocks

use serde::Serialize;

use super::expression::{Equality, Expression};
use super::label::Label;
use super::traits::AstNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    /// `<identifier> <verb> <constant>.` or, reversed, `<expression> <verb> <identifier>.`
    Assignment { target: String, value: Expression },
    /// `<identifier> will generate a new instance.`
    Increment { target: String },
    /// `See <label>.`
    GoTo { label: Label },
    /// `If <equality>, <block>`
    Conditional { condition: Equality, body: Block },
    /// `<expression>.`
    Expression(Expression),
    /// `[!-- ... --]`
    Comment,
    /// A period with nothing recognizable in front of it
    Invalid,
}

impl AstNode for Statement {
    fn node_type(&self) -> &'static str {
        match self {
            Statement::Assignment { .. } => "Assignment",
            Statement::Increment { .. } => "Increment",
            Statement::GoTo { .. } => "GoTo",
            Statement::Conditional { .. } => "Conditional",
            Statement::Expression(_) => "ExpressionStatement",
            Statement::Comment => "Comment",
            Statement::Invalid => "InvalidStatement",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Statement::Assignment { target, value } => format!("{} := {}", target, value),
            Statement::Increment { target } => format!("{}++", target),
            Statement::GoTo { label } => label.to_string(),
            Statement::Conditional { condition, .. } => format!("if {}", condition),
            Statement::Expression(expr) => expr.to_string(),
            Statement::Comment | Statement::Invalid => String::new(),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            Statement::Assignment { value, .. } => vec![value as &dyn AstNode],
            Statement::GoTo { label } => vec![label as &dyn AstNode],
            Statement::Conditional { condition, body } => {
                vec![condition as &dyn AstNode, body as &dyn AstNode]
            }
            Statement::Expression(expr) => vec![expr as &dyn AstNode],
            Statement::Increment { .. } | Statement::Comment | Statement::Invalid => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        "Block"
    }

    fn display_label(&self) -> String {
        match self.statements.len() {
            1 => "1 statement".to_string(),
            n => format!("{} statements", n),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.statements
            .iter()
            .map(|statement| statement as &dyn AstNode)
            .collect()
    }
}
