//! Grammar productions
//!
//! Every production is a plain function `fn(Input<'a>, usize) -> Outcome<T>`, written as a
//! straight line of [`Sequence`](super::sequence::Sequence) steps. Alternatives are never
//! tried in order and committed to; all of them run from the same position and
//! [`choose_nearest`](super::resolver::choose_nearest) picks the one that found its first
//! token closest to where the search began.
//!
//! Dependency order, leaf first:
//!
//!     labels        label
//!     expressions   square, add, constant, function_call, variable, expression, copula, equality
//!     statements    assignment, reverse_assignment, increment, goto, expression_statement,
//!                   comment, invalid, statement, conditional
//!     document      block, body_part, document
//!
//! `statements` and `document` are mutually recursive: a conditional owns a block, and a
//! block is a run of statements.

pub mod document;
pub mod expressions;
pub mod labels;
pub mod statements;

pub use document::{block, body_part, document};
pub use expressions::{
    add, constant, copula, equality, expression, function_call, square, variable,
};
pub use labels::label;
pub use statements::{
    assignment, comment, conditional, expression_statement, goto, increment, invalid,
    reverse_assignment, statement,
};

use super::primitives::{Input, Outcome, Parsed};
use crate::redacted::lexer::{ObjectClass, Token, TokenKind, Verb};

/// Match a token of `kind` and pull its payload out
fn payload<'a, T>(
    input: Input<'a>,
    kind: TokenKind,
    pos: usize,
    extract: impl FnOnce(&'a Token) -> Option<T>,
) -> Outcome<T> {
    let matched = input.match_kind(kind, pos)?;
    let value = extract(matched.value)?;
    Some(Parsed::new(value, matched.start, matched.next))
}

pub fn identifier(input: Input<'_>, pos: usize) -> Outcome<String> {
    payload(input, TokenKind::Identifier, pos, |token| match token {
        Token::Identifier(name) => Some(name.clone()),
        _ => None,
    })
}

pub fn constant_value(input: Input<'_>, pos: usize) -> Outcome<u64> {
    payload(input, TokenKind::Constant, pos, |token| match token {
        Token::Constant(value) => Some(*value),
        _ => None,
    })
}

pub fn verb(input: Input<'_>, pos: usize) -> Outcome<Verb> {
    payload(input, TokenKind::Verb, pos, |token| match token {
        Token::Verb(verb) => Some(*verb),
        _ => None,
    })
}

pub fn item_number(input: Input<'_>, pos: usize) -> Outcome<u64> {
    payload(input, TokenKind::ItemNumber, pos, |token| match token {
        Token::ItemNumber(number) => Some(*number),
        _ => None,
    })
}

pub fn object_class(input: Input<'_>, pos: usize) -> Outcome<ObjectClass> {
    payload(input, TokenKind::ObjectClass, pos, |token| match token {
        Token::ObjectClass(class) => Some(*class),
        _ => None,
    })
}
