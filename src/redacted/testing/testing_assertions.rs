//! Fluent assertion API for AST nodes

use crate::redacted::ast::{AstNode, Block, BodyPart, Document, ObjectClass, Statement};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize<'n>(nodes: impl Iterator<Item = &'n dyn AstNode>) -> String {
    nodes.map(|n| n.node_type()).collect::<Vec<_>>().join(", ")
}

fn describe(node: &dyn AstNode) -> String {
    let label = node.display_label();
    if label.is_empty() {
        node.node_type().to_string()
    } else {
        format!("{} ({})", node.node_type(), label)
    }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn number(self, expected: u64) -> Self {
        assert_eq!(self.doc.number, expected, "Unexpected item number");
        self
    }

    pub fn class(self, expected: ObjectClass) -> Self {
        assert_eq!(self.doc.class, expected, "Unexpected object class");
        self
    }

    /// Assert the number of body parts
    pub fn part_count(self, expected: usize) -> Self {
        let actual = self.doc.parts.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} parts, found {} parts: [{}]",
            expected,
            actual,
            summarize(self.doc.parts.iter().map(|p| p as &dyn AstNode))
        );
        self
    }

    /// Assert on a specific body part by index
    pub fn part<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PartAssertion<'a>),
    {
        assert!(
            index < self.doc.parts.len(),
            "Part index {} out of bounds (document has {} parts)",
            index,
            self.doc.parts.len()
        );
        assertion(PartAssertion {
            part: &self.doc.parts[index],
            context: format!("parts[{}]", index),
        });
        self
    }
}

// ============================================================================
// BodyPart Assertions
// ============================================================================

pub struct PartAssertion<'a> {
    part: &'a BodyPart,
    context: String,
}

impl<'a> PartAssertion<'a> {
    /// Assert this part is a block and return block assertions
    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.part {
            BodyPart::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            BodyPart::Label(label) => {
                panic!("{}: Expected Block, found Label ({})", self.context, label)
            }
        }
    }

    /// Assert this part is a label rendering as `expected`, e.g. "Addendum 1-a"
    pub fn assert_label(self, expected: &str) {
        match self.part {
            BodyPart::Label(label) => assert_eq!(
                label.to_string(),
                expected,
                "{}: Unexpected label",
                self.context
            ),
            BodyPart::Block(block) => panic!(
                "{}: Expected Label, found Block with {} statements",
                self.context,
                block.statements.len()
            ),
        }
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.block.statements.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} statements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.block.statements.iter().map(|s| s as &dyn AstNode))
        );
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.block.statements.len(),
            "{}: Statement index {} out of bounds (block has {} statements)",
            self.context,
            index,
            self.block.statements.len()
        );
        assertion(StatementAssertion {
            statement: &self.block.statements[index],
            context: format!("{}:statements[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Statement Assertions
// ============================================================================

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            describe(self.statement)
        )
    }

    /// `value` is compared against the expression's display form
    pub fn assert_assignment(self, target: &str, value: &str) {
        match self.statement {
            Statement::Assignment {
                target: actual_target,
                value: actual_value,
            } => {
                assert_eq!(actual_target, target, "{}: Unexpected target", self.context);
                assert_eq!(
                    actual_value.to_string(),
                    value,
                    "{}: Unexpected value",
                    self.context
                );
            }
            _ => self.mismatch("Assignment"),
        }
    }

    pub fn assert_increment(self, target: &str) {
        match self.statement {
            Statement::Increment {
                target: actual_target,
            } => assert_eq!(actual_target, target, "{}: Unexpected target", self.context),
            _ => self.mismatch("Increment"),
        }
    }

    pub fn assert_goto(self, label: &str) {
        match self.statement {
            Statement::GoTo { label: actual } => {
                assert_eq!(actual.to_string(), label, "{}: Unexpected label", self.context)
            }
            _ => self.mismatch("GoTo"),
        }
    }

    /// Checks the condition's display form and returns assertions on the body
    pub fn assert_conditional(self, condition: &str) -> BlockAssertion<'a> {
        match self.statement {
            Statement::Conditional {
                condition: actual,
                body,
            } => {
                assert_eq!(
                    actual.to_string(),
                    condition,
                    "{}: Unexpected condition",
                    self.context
                );
                BlockAssertion {
                    block: body,
                    context: format!("{}:body", self.context),
                }
            }
            _ => self.mismatch("Conditional"),
        }
    }

    /// `expr` is compared against the expression's display form
    pub fn assert_expression(self, expr: &str) {
        match self.statement {
            Statement::Expression(actual) => {
                assert_eq!(actual.to_string(), expr, "{}: Unexpected expression", self.context)
            }
            _ => self.mismatch("ExpressionStatement"),
        }
    }

    pub fn assert_comment(self) {
        if !matches!(self.statement, Statement::Comment) {
            self.mismatch("Comment")
        }
    }

    pub fn assert_invalid(self) {
        if !matches!(self.statement, Statement::Invalid) {
            self.mismatch("InvalidStatement")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redacted::ast::{Expression, Label};

    fn sample() -> Document {
        Document::new(
            5,
            ObjectClass::Keter,
            vec![
                BodyPart::Block(Block::new(vec![
                    Statement::Comment,
                    Statement::GoTo {
                        label: Label::addendum(1, Some('a')),
                    },
                ])),
                BodyPart::Label(Label::Description),
                BodyPart::Block(Block::new(vec![Statement::Expression(Expression::square(
                    "n",
                ))])),
            ],
        )
    }

    #[test]
    fn test_fluent_assertions_pass() {
        let doc = sample();
        assert_document(&doc)
            .number(5)
            .class(ObjectClass::Keter)
            .part_count(3)
            .part(0, |part| {
                part.assert_block()
                    .statement_count(2)
                    .statement(0, |s| s.assert_comment())
                    .statement(1, |s| s.assert_goto("Addendum 1-a"));
            })
            .part(1, |part| part.assert_label("Description"))
            .part(2, |part| {
                part.assert_block()
                    .statement(0, |s| s.assert_expression("square(n)"));
            });
    }

    #[test]
    #[should_panic(expected = "parts[0]:statements[1]: Expected Comment, found GoTo (Addendum 1-a)")]
    fn test_mismatch_names_the_path() {
        let doc = sample();
        assert_document(&doc).part(0, |part| {
            part.assert_block().statement(1, |s| s.assert_comment());
        });
    }

    #[test]
    #[should_panic(expected = "Expected 2 parts, found 3 parts: [Block, Label, Block]")]
    fn test_count_mismatch_summarizes() {
        let doc = sample();
        assert_document(&doc).part_count(2);
    }
}
