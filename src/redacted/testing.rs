//! Testing utilities for AST assertions
//!
//! # Parser Testing Guidelines
//!
//! Document-level parser tests use two tools together:
//!
//! 1. **[RedactedSources](crate::redacted::processor::redacted_sources::RedactedSources)** for
//!    verified report text
//! 2. **[assert_document](fn@assert_document)** for verifying the tree
//!
//! ## Rule 1: Use RedactedSources for document content
//!
//! Whether a sentence lexes the way you think it does is easy to get wrong: `is` hides
//! inside `this`, a stray `the ... of` becomes an identifier, and a period inside a comment
//! is still a period. The samples under `samples/` have been traced token by token, so
//! tests that read them assert against known-good input.
//!
//! Small token-level tests inside the grammar modules build their token vectors by hand
//! instead; that is fine, they never go through the lexer.
//!
//! ## Rule 2: Use assert_document for AST verification
//!
//! ```rust,ignore
//! use crate::redacted::testing::assert_document;
//!
//! let doc = RedactedSources::get_document("010-conditional.redacted")?;
//! assert_document(&doc)
//!     .number(0)
//!     .part_count(1)
//!     .part(0, |part| {
//!         part.assert_block().statement_count(1).statement(0, |stmt| {
//!             stmt.assert_conditional("x is 1")
//!                 .statement(0, |inner| inner.assert_increment("x"));
//!         });
//!     });
//! ```
//!
//! Failures name the path that failed:
//!
//! ```text
//! parts[0]:statements[2]: Expected Comment, found GoTo (Addendum 1-a)
//! ```

mod testing_assertions;

pub use testing_assertions::{
    assert_document, BlockAssertion, DocumentAssertion, PartAssertion, StatementAssertion,
};
