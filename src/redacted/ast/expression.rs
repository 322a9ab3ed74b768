//! Expression forms and the equality used by conditionals

use serde::Serialize;
use std::fmt;

use super::traits::AstNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression {
    /// A named variable, `the x of` or `SCP-n-n`
    Variable(String),
    /// `<identifier> in addition to <expression>`
    Add {
        left: String,
        right: Box<Expression>,
    },
    Constant(u64),
    /// `(<name> <arg> and <arg> ...)`, never without arguments
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    /// `the square containment chamber of <identifier>`
    Square(String),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn add(left: impl Into<String>, right: Expression) -> Self {
        Expression::Add {
            left: left.into(),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn square(name: impl Into<String>) -> Self {
        Expression::Square(name.into())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => f.write_str(name),
            Expression::Add { left, right } => write!(f, "{} + {}", left, right),
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Expression::Square(name) => write!(f, "square({})", name),
        }
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Variable(_) => "Variable",
            Expression::Add { .. } => "Add",
            Expression::Constant(_) => "Constant",
            Expression::FunctionCall { .. } => "FunctionCall",
            Expression::Square(_) => "Square",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            Expression::Add { right, .. } => vec![right.as_ref() as &dyn AstNode],
            Expression::FunctionCall { args, .. } => {
                args.iter().map(|arg| arg as &dyn AstNode).collect()
            }
            Expression::Variable(_) | Expression::Constant(_) | Expression::Square(_) => {
                Vec::new()
            }
        }
    }
}

/// `<expression> is <expression>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equality {
    pub left: Expression,
    pub right: Expression,
}

impl Equality {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.left, self.right)
    }
}

impl AstNode for Equality {
    fn node_type(&self) -> &'static str {
        "Equality"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.left as &dyn AstNode, &self.right as &dyn AstNode]
    }
}
