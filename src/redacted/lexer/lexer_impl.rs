//! Implementation of the redacted lexer
//!
//! Drives the lexeme catalog over the source left to right. Ignore markers are dropped on
//! the spot, so they never reach the token sequence.

use std::ops::Range;

use tracing::{debug, trace};

use crate::redacted::lexer::lexemes::{self, Lexeme};
use crate::redacted::lexer::tokens::Token;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut ignored = 0usize;

    while let Some((rule, lexeme, end)) = lexemes::recognize(source, offset) {
        match lexeme {
            Lexeme::Emit(token) => {
                trace!(rule = rule.name, offset, end, "lexeme");
                tokens.push((token, offset..end));
            }
            Lexeme::Ignore => ignored += 1,
        }
        offset = end;
    }

    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        ignored,
        "tokenized source"
    );
    tokens
}
