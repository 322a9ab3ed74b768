//! Parser module for the redacted format
//!
//! A hand-rolled combinator parser over the token sequence. Layers, bottom up:
//!
//! - [`primitives`]: skip-tolerant `match`, end-of-stream and the scoped forbidden kind
//! - [`resolver`]: picking one outcome among competing alternatives
//! - [`sequence`]: straight-line sequencing that aborts on the first failed step
//! - [`grammar`]: the productions, from labels and expressions up to the document
//!
//! ## Testing
//!
//! Document-level tests use the verified samples from
//! [`RedactedSources`](crate::redacted::processor::redacted_sources::RedactedSources) and the
//! fluent assertions in the test-only `testing` module.

pub mod api;
pub mod grammar;
pub mod primitives;
pub mod resolver;
pub mod sequence;
#[cfg(test)]
mod tests;

pub use crate::redacted::ast::{
    AstNode, Block, BodyPart, Document, Equality, Expression, Label, Statement,
};
pub use crate::redacted::formats::{serialize_ast_tag, to_treeviz_str};
pub use api::{parse, parse_document, ParseError};
pub use primitives::{
    end_of_stream, match_token, with_forbidden_tag, Input, Outcome, ParseContext, Parsed,
    TokenStream, MAX_NESTING,
};
pub use resolver::{choose_longest, choose_nearest, Candidate};
pub use sequence::Sequence;
