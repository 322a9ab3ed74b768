//! Main module for redacted library functionality

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;
