//! Labels: addendum headings and the description marker
//!
//! Labels appear as body parts of a document and as the target of a `See ...` jump.

use serde::Serialize;
use std::fmt;

use super::traits::AstNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Label {
    Addendum { number: u64, letter: Option<char> },
    Description,
}

impl Label {
    pub fn addendum(number: u64, letter: Option<char>) -> Self {
        Label::Addendum { number, letter }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Addendum {
                number,
                letter: Some(letter),
            } => write!(f, "Addendum {}-{}", number, letter),
            Label::Addendum {
                number,
                letter: None,
            } => write!(f, "Addendum {}", number),
            Label::Description => f.write_str("Description"),
        }
    }
}

impl AstNode for Label {
    fn node_type(&self) -> &'static str {
        "Label"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}
