//! Sequential combinator runner
//!
//! A rule body is a straight line of steps. [`Sequence`] threads the position from one
//! step to the next and remembers where the first consumed token was; each required step
//! returns an `Option` that the rule propagates with `?`, so the first failing step aborts
//! the whole rule and nothing after it runs.
//!
//! ```text
//! let mut seq = Sequence::new(input, pos);
//! let target = seq.then(identifier)?;
//! seq.expect(TokenKind::Increment)?;
//! seq.expect(TokenKind::Period)?;
//! seq.finish(Statement::Increment { target })
//! ```

use super::primitives::{Input, Outcome, Parsed};
use crate::redacted::lexer::{Token, TokenKind};

pub struct Sequence<'a> {
    input: Input<'a>,
    start: Option<usize>,
    pos: usize,
}

impl<'a> Sequence<'a> {
    pub fn new(input: Input<'a>, pos: usize) -> Self {
        Self {
            input,
            start: None,
            pos,
        }
    }

    pub fn input(&self) -> Input<'a> {
        self.input
    }

    /// Position the next step starts from
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Record an already computed outcome as the next step
    pub fn step<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        let parsed = outcome?;
        self.start.get_or_insert(parsed.start);
        self.pos = parsed.next;
        Some(parsed.value)
    }

    /// Run `rule` at the current position as the next step
    pub fn then<T>(&mut self, rule: impl FnOnce(Input<'a>, usize) -> Outcome<T>) -> Option<T> {
        let outcome = rule(self.input, self.pos);
        self.step(outcome)
    }

    /// Run `rule` without requiring it. On failure the position stays where it was and
    /// the sequence carries on.
    pub fn optional<T>(&mut self, rule: impl FnOnce(Input<'a>, usize) -> Outcome<T>) -> Option<T> {
        self.then(rule)
    }

    /// Skip-tolerant match of one token
    pub fn expect(&mut self, kind: TokenKind) -> Option<&'a Token> {
        self.then(|input, pos| input.match_kind(kind, pos))
    }

    /// Close the rule. Its start is the start of the first step that consumed anything.
    pub fn finish<T>(self, value: T) -> Outcome<T> {
        Some(Parsed::new(value, self.start.unwrap_or(self.pos), self.pos))
    }
}
