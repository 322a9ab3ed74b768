//! Public API for the parser.

use std::fmt;

use tracing::debug;

use crate::redacted::ast::Document;
use crate::redacted::lexer::{lex, Token};
use crate::redacted::parser::grammar::document;
use crate::redacted::parser::primitives::TokenStream;

/// The one way a parse fails: no document could be matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `furthest` is the furthest token index any successful match reached. It is a hint
    /// for humans, nothing in the grammar depends on it.
    NoDocument { furthest: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoDocument { furthest } => write!(
                f,
                "Parse error: no document found (furthest token reached: {})",
                furthest
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a document from a token sequence. Tokens after the document are ignored.
pub fn parse(tokens: Vec<Token>) -> Result<Document, ParseError> {
    let stream = TokenStream::new(tokens);
    match document(stream.input(), 0) {
        Some(parsed) => {
            debug!(
                consumed = parsed.next,
                tokens = stream.len(),
                "parse succeeded"
            );
            Ok(parsed.value)
        }
        None => {
            let furthest = stream.furthest();
            debug!(furthest, tokens = stream.len(), "parse failed");
            Err(ParseError::NoDocument { furthest })
        }
    }
}

/// Main parser function that takes source text and returns a parsed document
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    parse(lex(source))
}
