//! Document root

use serde::Serialize;

use super::label::Label;
use super::statement::Block;
use super::traits::AstNode;
use crate::redacted::lexer::ObjectClass;

/// One parsed report: item number, object class and the ordered body parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub number: u64,
    pub class: ObjectClass,
    pub parts: Vec<BodyPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BodyPart {
    Block(Block),
    Label(Label),
}

impl Document {
    pub fn new(number: u64, class: ObjectClass, parts: Vec<BodyPart>) -> Self {
        Self {
            number,
            class,
            parts,
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.parts.iter().filter_map(|part| match part {
            BodyPart::Block(block) => Some(block),
            BodyPart::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.parts.iter().filter_map(|part| match part {
            BodyPart::Label(label) => Some(label),
            BodyPart::Block(_) => None,
        })
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("SCP-{:03} ({})", self.number, self.class)
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.parts.iter().map(|part| part as &dyn AstNode).collect()
    }
}

impl AstNode for BodyPart {
    fn node_type(&self) -> &'static str {
        match self {
            BodyPart::Block(block) => block.node_type(),
            BodyPart::Label(label) => label.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            BodyPart::Block(block) => block.display_label(),
            BodyPart::Label(label) => label.display_label(),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            BodyPart::Block(block) => block.children(),
            BodyPart::Label(label) => label.children(),
        }
    }
}
