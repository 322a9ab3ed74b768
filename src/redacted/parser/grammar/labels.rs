//! Label production: an addendum heading or the description marker

use tracing::trace;

use crate::redacted::ast::Label;
use crate::redacted::lexer::{Token, TokenKind};
use crate::redacted::parser::primitives::{Input, Outcome};
use crate::redacted::parser::resolver::{choose_nearest, Candidate};

pub fn label(input: Input<'_>, pos: usize) -> Outcome<Label> {
    trace!(pos, "label");
    let addendum = input
        .match_kind(TokenKind::AddendumStart, pos)
        .and_then(|parsed| match *parsed.value {
            Token::AddendumStart { number, letter } => {
                Some(parsed.map(|_| Label::addendum(number, letter)))
            }
            _ => None,
        });
    let description = input
        .match_kind(TokenKind::DescriptionStart, pos)
        .map(|parsed| parsed.map(|_| Label::Description));
    choose_nearest([Candidate::new(addendum), Candidate::new(description)])
}
