//! Documents far larger than the samples
//!
//! These run on the default test thread: parsing must not need more stack as a document
//! grows longer, only as its conditionals nest deeper.

use redacted::redacted::ast::{BodyPart, Statement};
use redacted::redacted::parser::{parse_document, MAX_NESTING};

const HEADER: &str = "Item #: SCP-900\nObject Class: Keter\nSpecial Containment Procedures:\n";

#[test]
fn test_many_separated_conditionals() {
    let count = 2000;
    let source = format!(
        "{}{}",
        HEADER,
        "If x is 1, x will generate a new instance.\n-----\n".repeat(count)
    );
    let doc = parse_document(&source).unwrap();

    assert_eq!(doc.parts.len(), count);
    for part in &doc.parts {
        let BodyPart::Block(block) = part else {
            panic!("expected a block, found {:?}", part);
        };
        assert_eq!(block.statements.len(), 1);
        let Statement::Conditional { body, .. } = &block.statements[0] else {
            panic!("expected a conditional, found {:?}", block.statements[0]);
        };
        assert_eq!(
            body.statements,
            vec![Statement::Increment { target: "x".into() }]
        );
    }
}

#[test]
fn test_many_plain_statements() {
    let count = 1000;
    let source = format!(
        "{}{}",
        HEADER,
        "SCP-900-1 has unique features. the n of will generate a new instance. ".repeat(count)
    );
    let doc = parse_document(&source).unwrap();

    assert_eq!(doc.parts.len(), 1);
    let BodyPart::Block(block) = &doc.parts[0] else {
        panic!("expected a block, found {:?}", doc.parts[0]);
    };
    assert_eq!(block.statements.len(), 2 * count);
}

#[test]
fn test_unseparated_conditionals_nest_up_to_the_limit() {
    let count = 300;
    let source = format!(
        "{}{}",
        HEADER,
        "If x is 1, x will generate a new instance. ".repeat(count)
    );
    let doc = parse_document(&source).unwrap();

    let BodyPart::Block(block) = &doc.parts[0] else {
        panic!("expected a block, found {:?}", doc.parts[0]);
    };
    let mut statements = &block.statements;
    let mut depth = 0;
    while let Some(Statement::Conditional { body, .. }) = statements.last() {
        depth += 1;
        statements = &body.statements;
    }
    assert_eq!(depth, MAX_NESTING as usize);
    assert_eq!(statements.len(), 1 + count - MAX_NESTING as usize);
}
