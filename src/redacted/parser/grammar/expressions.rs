//! Expression productions
//!
//! `expression` is the nearest-resolved choice over the specific forms (square, add,
//! constant, function call) with the bare variable as a deprioritized fallback. It always
//! runs with the period forbidden, so looking for an expression never reaches into the
//! next statement.

use tracing::trace;

use super::{constant_value, identifier, verb};
use crate::redacted::ast::{Equality, Expression};
use crate::redacted::lexer::{TokenKind, Verb};
use crate::redacted::parser::primitives::{with_forbidden_tag, Input, Outcome};
use crate::redacted::parser::resolver::{choose_nearest, Candidate};
use crate::redacted::parser::sequence::Sequence;

/// `[the] square containment chamber [of] <identifier>`
pub fn square(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    let mut seq = Sequence::new(input, pos);
    seq.optional(|input, pos| input.match_kind(TokenKind::The, pos));
    seq.expect(TokenKind::Square)?;
    seq.optional(|input, pos| input.match_kind(TokenKind::Of, pos));
    let name = seq.then(identifier)?;
    seq.finish(Expression::Square(name))
}

/// `<identifier> in addition to <expression>`
pub fn add(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    let mut seq = Sequence::new(input.nested()?, pos);
    let left = seq.then(identifier)?;
    seq.expect(TokenKind::Add)?;
    let right = seq.then(expression)?;
    seq.finish(Expression::add(left, right))
}

pub fn constant(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    constant_value(input, pos).map(|parsed| parsed.map(Expression::Constant))
}

enum Separator {
    And,
    Close,
}

fn separator(input: Input<'_>, pos: usize) -> Outcome<Separator> {
    choose_nearest([
        Candidate::new(
            input
                .match_kind(TokenKind::And, pos)
                .map(|parsed| parsed.map(|_| Separator::And)),
        ),
        Candidate::new(
            input
                .match_kind(TokenKind::RParen, pos)
                .map(|parsed| parsed.map(|_| Separator::Close)),
        ),
    ])
}

/// `( <identifier> <expression> [and <expression>]* )`
pub fn function_call(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    let mut seq = Sequence::new(input.nested()?, pos);
    seq.expect(TokenKind::LParen)?;
    let name = seq.then(identifier)?;
    let mut args = vec![seq.then(expression)?];
    loop {
        match seq.then(separator)? {
            Separator::Close => break,
            Separator::And => args.push(seq.then(expression)?),
        }
    }
    seq.finish(Expression::call(name, args))
}

pub fn variable(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    identifier(input, pos).map(|parsed| parsed.map(Expression::Variable))
}

pub fn expression(input: Input<'_>, pos: usize) -> Outcome<Expression> {
    with_forbidden_tag(input, TokenKind::Period, |input| {
        input.memoized(pos, || {
            trace!(pos, "expression");
            choose_nearest([
                Candidate::new(square(input, pos)),
                Candidate::new(add(input, pos)),
                Candidate::new(constant(input, pos)),
                Candidate::new(function_call(input, pos)),
                Candidate::deprioritized(variable(input, pos)),
            ])
        })
    })
}

/// The first verb found, if and only if it is `is`. The returned position is just past it.
pub fn copula(input: Input<'_>, pos: usize) -> Outcome<Verb> {
    let parsed = verb(input, pos)?;
    (parsed.value == Verb::Is).then_some(parsed)
}

/// `<expression> is <expression>`
pub fn equality(input: Input<'_>, pos: usize) -> Outcome<Equality> {
    let mut seq = Sequence::new(input, pos);
    let left = seq.then(expression)?;
    seq.then(copula)?;
    let right = seq.then(expression)?;
    seq.finish(Equality::new(left, right))
}
