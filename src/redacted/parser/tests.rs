use crate::redacted::ast::{Block, BodyPart, Equality, Expression, ObjectClass, Statement};
use crate::redacted::lexer::{lex, Token};
use crate::redacted::parser::api::{parse, parse_document, ParseError};
use crate::redacted::parser::grammar::document;
use crate::redacted::parser::primitives::TokenStream;
use crate::redacted::processor::redacted_sources::RedactedSources;
use crate::redacted::testing::assert_document;

#[test]
fn test_conditional_document() {
    let doc = RedactedSources::get_document("010-conditional.redacted").unwrap();

    assert_eq!(
        doc.parts,
        vec![BodyPart::Block(Block::new(vec![Statement::Conditional {
            condition: Equality::new(Expression::variable("x"), Expression::Constant(1)),
            body: Block::new(vec![Statement::Increment { target: "x".into() }]),
        }]))]
    );
    assert_document(&doc).number(0).class(ObjectClass::Safe);
}

#[test]
fn test_header_only_document() {
    let doc = RedactedSources::get_document("000-header-only.redacted").unwrap();
    assert_document(&doc)
        .number(1)
        .class(ObjectClass::Thaumiel)
        .part_count(0);
}

#[test]
fn test_mixed_body_document() {
    let doc = RedactedSources::get_document("020-mixed-body.redacted").unwrap();

    assert_document(&doc)
        .number(4001)
        .class(ObjectClass::Euclid)
        .part_count(5)
        .part(0, |part| {
            part.assert_block()
                .statement_count(4)
                .statement(0, |s| s.assert_assignment("SCP-4001-1", "1"))
                .statement(1, |s| s.assert_expression("square(n)"))
                .statement(2, |s| s.assert_comment())
                .statement(3, |s| s.assert_goto("Addendum 1-a"));
        })
        .part(1, |part| part.assert_label("Description"))
        .part(2, |part| {
            part.assert_block()
                .statement_count(1)
                .statement(0, |s| s.assert_expression("sum(digits, 2)"));
        })
        .part(3, |part| part.assert_label("Addendum 1-a"))
        .part(4, |part| {
            part.assert_block()
                .statement_count(1)
                .statement(0, |s| s.assert_increment("n"));
        });
}

#[test]
fn test_missing_header_fails() {
    let source = RedactedSources::get_string("030-missing-header.redacted").unwrap();
    assert_eq!(
        parse_document(&source),
        Err(ParseError::NoDocument { furthest: 0 })
    );
}

#[test]
fn test_failure_reports_furthest_match() {
    // header found, object class missing
    let tokens = vec![Token::ItemNumber(9), Token::ConProcsStart, Token::Period];
    assert_eq!(parse(tokens), Err(ParseError::NoDocument { furthest: 1 }));
}

#[test]
fn test_empty_input_fails() {
    assert!(parse(Vec::new()).is_err());
    assert!(parse_document("").is_err());
}

#[test]
fn test_invalid_statement_does_not_abort_block() {
    let tokens = vec![
        Token::ItemNumber(2),
        Token::ObjectClass(ObjectClass::Safe),
        Token::ConProcsStart,
        Token::Period,
        Token::Identifier("x".into()),
        Token::Increment,
        Token::Period,
    ];
    let doc = parse(tokens).unwrap();
    assert_document(&doc).part_count(1).part(0, |part| {
        part.assert_block()
            .statement_count(2)
            .statement(0, |s| s.assert_invalid())
            .statement(1, |s| s.assert_increment("x"));
    });
}

#[test]
fn test_trailing_tokens_are_ignored() {
    // the closing rule ends the block, the stray tokens after it form nothing
    let mut tokens = lex("Item #: SCP-000\nObject Class: Safe\nSpecial Containment Procedures: x will generate a new instance.\n-----\n");
    tokens.extend([Token::Comma, Token::RParen]);
    let doc = parse(tokens).unwrap();
    assert_document(&doc).part_count(1).part(0, |part| {
        part.assert_block()
            .statement_count(1)
            .statement(0, |s| s.assert_increment("x"));
    });
}

#[test]
fn test_memoized_reparse_matches_fresh_parse() {
    let tokens = RedactedSources::get_tokens("020-mixed-body.redacted").unwrap();
    let stream = TokenStream::new(tokens.clone());

    let first = document(stream.input(), 0).unwrap();
    let replayed = document(stream.input(), 0).unwrap();
    let fresh = parse(tokens).unwrap();

    assert_eq!(first, replayed);
    assert_eq!(first.value, fresh);
}
