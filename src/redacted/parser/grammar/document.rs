//! Block and document productions

use tracing::{debug, trace};

use super::labels::label;
use super::statements::{statement, STATEMENT_START};
use super::{item_number, object_class};
use crate::redacted::ast::{Block, BodyPart, Document, Statement};
use crate::redacted::lexer::TokenKind;
use crate::redacted::parser::primitives::{Input, Outcome};
use crate::redacted::parser::resolver::{choose_nearest, Candidate};
use crate::redacted::parser::sequence::Sequence;

enum BlockStep {
    Statement(Statement),
    End,
}

/// A horizontal rule or the end of the stream
fn block_end(input: Input<'_>, pos: usize) -> Outcome<BlockStep> {
    choose_nearest([
        Candidate::new(
            input
                .match_kind(TokenKind::Hr, pos)
                .map(|parsed| parsed.map(|_| BlockStep::End)),
        ),
        Candidate::new(
            input
                .end_of_stream(pos)
                .map(|parsed| parsed.map(|_| BlockStep::End)),
        ),
    ])
}

fn block_step(input: Input<'_>, pos: usize) -> Outcome<BlockStep> {
    let end = block_end(input, pos);
    // a statement lying past the terminator cannot win, so it is not parsed at all
    let reachable = match (&end, input.peek_start(STATEMENT_START, pos)) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(end), Some(at)) => at <= end.start,
    };
    let next_statement = if reachable {
        statement(input, pos).map(|parsed| parsed.map(BlockStep::Statement))
    } else {
        None
    };
    choose_nearest([Candidate::new(next_statement), Candidate::new(end)])
}

/// One statement, then more statements until a horizontal rule or the end of the stream.
///
/// The terminator is detected, not consumed: `next` is the position right after the last
/// statement, so a following rule is still there for whoever comes next. If the next
/// thing is neither a statement nor a terminator, the whole block fails.
pub fn block(input: Input<'_>, pos: usize) -> Outcome<Block> {
    input.memoized(pos, || {
        trace!(pos, "block");
        let mut seq = Sequence::new(input, pos);
        let mut statements = vec![seq.then(statement)?];
        loop {
            let step = block_step(input, seq.position())?;
            if matches!(step.value, BlockStep::End) {
                break;
            }
            if let Some(BlockStep::Statement(stmt)) = seq.step(Some(step)) {
                statements.push(stmt);
            }
        }
        seq.finish(Block::new(statements))
    })
}

pub fn body_part(input: Input<'_>, pos: usize) -> Outcome<BodyPart> {
    choose_nearest([
        Candidate::new(block(input, pos).map(|parsed| parsed.map(BodyPart::Block))),
        Candidate::new(label(input, pos).map(|parsed| parsed.map(BodyPart::Label))),
    ])
}

/// Item header, object class, the containment-procedures marker, then body parts for as
/// long as either a block or a label can be found
pub fn document(input: Input<'_>, pos: usize) -> Outcome<Document> {
    let mut seq = Sequence::new(input, pos);
    let number = seq.then(item_number)?;
    let class = seq.then(object_class)?;
    seq.expect(TokenKind::ConProcsStart)?;

    let mut parts = Vec::new();
    while let Some(part) = seq.then(body_part) {
        parts.push(part);
    }
    debug!(number, %class, parts = parts.len(), next = seq.position(), "document");
    seq.finish(Document::new(number, class, parts))
}
