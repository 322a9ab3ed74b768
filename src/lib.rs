//! # redacted
//!
//! A parser for the [REDACTED] report format.
//!
//! A report is a fixed-vocabulary narrative document: an item header, an object class,
//! a containment-procedures marker and then blocks of pseudo-statements interleaved with
//! addendum and description labels. Everything the grammar does not ask for is noise and
//! gets stepped over.
//!
//! File Layout
//!
//! src/redacted
//!   ├── lexer       Lexeme catalog and the driver that turns text into tokens
//!   ├── parser      Skip-tolerant primitives, ambiguity resolver, sequence runner, grammar
//!   ├── ast         The tree the grammar produces
//!   ├── formats     Tree serializers (tag, treeviz)
//!   ├── processor   Processing specs and sample sources
//!   └── testing     Fluent assertions over parsed documents (test builds only)
//!
//! The entry point is [`redacted::parser::parse_document`].

pub mod redacted;
