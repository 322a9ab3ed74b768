//! Token definitions for the redacted format
//!
//! Tokens carry only the payload their lexeme captures. The parser never looks at source
//! text again, so everything a grammar rule needs (identifier names, constant values, the
//! object class, addendum numbering) lives on the token itself.
//!
//! [`TokenKind`] is the payload-free tag of a token. The parser primitives match on kinds,
//! and the forbidden-tag guard is expressed as a kind.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Containment class of an item, the closed set accepted on the `Object Class:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectClass {
    Safe,
    Euclid,
    Keter,
    Thaumiel,
    Neutralized,
}

impl ObjectClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectClass::Safe => "Safe",
            ObjectClass::Euclid => "Euclid",
            ObjectClass::Keter => "Keter",
            ObjectClass::Thaumiel => "Thaumiel",
            ObjectClass::Neutralized => "Neutralized",
        }
    }
}

impl FromStr for ObjectClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Safe" => Ok(ObjectClass::Safe),
            "Euclid" => Ok(ObjectClass::Euclid),
            "Keter" => Ok(ObjectClass::Keter),
            "Thaumiel" => Ok(ObjectClass::Thaumiel),
            "Neutralized" => Ok(ObjectClass::Neutralized),
            other => Err(format!("unknown object class '{}'", other)),
        }
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three verbs of the vocabulary. Only `is` acts as a copula in equalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verb {
    Does,
    Has,
    Is,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Does => "does",
            Verb::Has => "has",
            Verb::Is => "is",
        }
    }
}

/// All tokens that survive lexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    // Document structure
    ItemNumber(u64),
    ObjectClass(ObjectClass),
    ConProcsStart,
    DescriptionStart,
    FootnoteStart,
    FootnoteEnd,
    AddendumStart { number: u64, letter: Option<char> },

    // Grammar tokens
    Identifier(String),
    Verb(Verb),
    Constant(u64),
    Period,
    The,
    Square,
    Of,
    If,
    Comma,
    Hr,
    Increment,
    Goto,
    Add,
    And,
    LParen,
    RParen,
    Tilde2,
    CommentStart,
    CommentEnd,
}

/// Payload-free tag of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    ItemNumber,
    ObjectClass,
    ConProcsStart,
    DescriptionStart,
    FootnoteStart,
    FootnoteEnd,
    AddendumStart,
    Identifier,
    Verb,
    Constant,
    Period,
    The,
    Square,
    Of,
    If,
    Comma,
    Hr,
    Increment,
    Goto,
    Add,
    And,
    LParen,
    RParen,
    Tilde2,
    CommentStart,
    CommentEnd,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::ItemNumber(_) => TokenKind::ItemNumber,
            Token::ObjectClass(_) => TokenKind::ObjectClass,
            Token::ConProcsStart => TokenKind::ConProcsStart,
            Token::DescriptionStart => TokenKind::DescriptionStart,
            Token::FootnoteStart => TokenKind::FootnoteStart,
            Token::FootnoteEnd => TokenKind::FootnoteEnd,
            Token::AddendumStart { .. } => TokenKind::AddendumStart,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Verb(_) => TokenKind::Verb,
            Token::Constant(_) => TokenKind::Constant,
            Token::Period => TokenKind::Period,
            Token::The => TokenKind::The,
            Token::Square => TokenKind::Square,
            Token::Of => TokenKind::Of,
            Token::If => TokenKind::If,
            Token::Comma => TokenKind::Comma,
            Token::Hr => TokenKind::Hr,
            Token::Increment => TokenKind::Increment,
            Token::Goto => TokenKind::Goto,
            Token::Add => TokenKind::Add,
            Token::And => TokenKind::And,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Tilde2 => TokenKind::Tilde2,
            Token::CommentStart => TokenKind::CommentStart,
            Token::CommentEnd => TokenKind::CommentEnd,
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::ItemNumber(n) => format!("item number {}", n),
            Token::ObjectClass(class) => format!("object class {}", class),
            Token::ConProcsStart => "'Special Containment Procedures:'".to_string(),
            Token::DescriptionStart => "'Description:'".to_string(),
            Token::FootnoteStart => "'[[footnote]]'".to_string(),
            Token::FootnoteEnd => "'[[/footnote]]'".to_string(),
            Token::AddendumStart {
                number,
                letter: Some(letter),
            } => format!("addendum {}-{}", number, letter),
            Token::AddendumStart {
                number,
                letter: None,
            } => format!("addendum {}", number),
            Token::Identifier(id) => format!("identifier '{}'", id),
            Token::Verb(verb) => format!("verb '{}'", verb.as_str()),
            Token::Constant(value) => format!("constant {}", value),
            Token::Period => "'.'".to_string(),
            Token::The => "'the'".to_string(),
            Token::Square => "'square containment chamber'".to_string(),
            Token::Of => "'of'".to_string(),
            Token::If => "'If'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Hr => "'-----'".to_string(),
            Token::Increment => "'will generate a new instance'".to_string(),
            Token::Goto => "'See'".to_string(),
            Token::Add => "'in addition to'".to_string(),
            Token::And => "'and'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Tilde2 => "'~~'".to_string(),
            Token::CommentStart => "'[!--'".to_string(),
            Token::CommentEnd => "'--]'".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
