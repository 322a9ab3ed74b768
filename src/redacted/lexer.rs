//! Lexer module for the redacted format
//!
//! This module contains the tokenization logic for the redacted format, including token
//! definitions, the lexeme catalog and the driver that runs it.
//!
//! Noise Handling
//!
//! The format is narrative prose with a small vocabulary of meaningful phrases sprinkled
//! in. Rather than failing on prose, the catalog ends with a recognizer that accepts any
//! single character and marks it as ignored. Ignored characters never become tokens, so the
//! lexer cannot fail: the worst input produces an empty token sequence, and it is up to the
//! parser to decide that nothing meaningful was found.

pub mod lexemes;
pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{ObjectClass, Token, TokenKind, Verb};

/// Main lexer function, returns the token sequence the parser runs over
pub fn lex(source: &str) -> Vec<Token> {
    tokenize(source)
}
