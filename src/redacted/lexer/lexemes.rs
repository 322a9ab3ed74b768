//! Lexeme catalog for the redacted format
//!
//! The catalog is an ordered table of recognizers. At a given text offset the first
//! recognizer that matches wins; its lexeme is either a token to emit or an ignore marker.
//! The last entry accepts any single character, so the catalog is total: every offset
//! inside the text is consumed by something and lexing always makes progress.
//!
//! Priority order:
//!
//!     structural phrases    Item #, Object Class, Special Containment Procedures, Description,
//!                           footnote delimiters, Addendum n[-x]
//!     identifiers           SCP-n-n, "the <word> of"
//!     constants             not cause paradoxes, unique features, single instance of, GoI-n
//!     vocabulary            verbs, connectives and punctuation (a logos lexer)
//!     plain notation        lone lowercase letters and bare numerals
//!     ignore                any single character
//!
//! Matching is not word-bounded except for the plain-notation entries, so `is` inside
//! `this` is a verb. The parser treats everything it does not ask for as noise anyway.
//!
//! The plain-notation entries only fire where every earlier entry declined, but they do add
//! tokens to prose: `e.g.` lexes to two identifiers and two periods, and `3 guards.` to a
//! constant and a period. Such fragments parse as expression statements.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::redacted::lexer::tokens::{ObjectClass, Token, Verb};

/// What a recognizer produced at an offset
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Emit(Token),
    Ignore,
}

/// A recognizer inspects `text` at `offset` and returns the lexeme and the end offset
pub type Recognizer = fn(&str, usize) -> Option<(Lexeme, usize)>;

/// A named catalog entry
pub struct LexemeRule {
    pub name: &'static str,
    pub recognize: Recognizer,
}

/// The ordered catalog, first match wins
pub static CATALOG: &[LexemeRule] = &[
    LexemeRule {
        name: "item_number",
        recognize: item_number,
    },
    LexemeRule {
        name: "object_class",
        recognize: object_class,
    },
    LexemeRule {
        name: "con_procs_start",
        recognize: con_procs_start,
    },
    LexemeRule {
        name: "description_start",
        recognize: description_start,
    },
    LexemeRule {
        name: "footnote_start",
        recognize: footnote_start,
    },
    LexemeRule {
        name: "footnote_end",
        recognize: footnote_end,
    },
    LexemeRule {
        name: "addendum_start",
        recognize: addendum_start,
    },
    LexemeRule {
        name: "identifier",
        recognize: identifier,
    },
    LexemeRule {
        name: "constant",
        recognize: constant,
    },
    LexemeRule {
        name: "vocabulary",
        recognize: vocabulary,
    },
    LexemeRule {
        name: "lone_letter",
        recognize: lone_letter,
    },
    LexemeRule {
        name: "numeral",
        recognize: numeral,
    },
    LexemeRule {
        name: "ignore_char",
        recognize: ignore_char,
    },
];

/// Run the catalog at `offset`, returning the winning rule with its lexeme and end offset.
/// Returns `None` only when `offset` is at or past the end of `text`.
pub fn recognize(text: &str, offset: usize) -> Option<(&'static LexemeRule, Lexeme, usize)> {
    if offset >= text.len() {
        return None;
    }
    CATALOG.iter().find_map(|rule| {
        (rule.recognize)(text, offset).map(|(lexeme, end)| (rule, lexeme, end))
    })
}

static ITEM_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Item #: SCP-([0-9]+)").expect("item number pattern"));

static OBJECT_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Object Class: (Safe|Euclid|Keter|Thaumiel|Neutralized)")
        .expect("object class pattern")
});

static ADDENDUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Addendum ([0-9]+)(?:-([A-Za-z0-9_]))?").expect("addendum pattern")
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:SCP-[0-9]+-[0-9]+|the ([A-Za-z0-9_]+) of)").expect("identifier pattern")
});

static CONSTANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(not cause paradoxes)|(unique features)|(single instance of)|GoI-([0-9]+))")
        .expect("constant pattern")
});

static LONE_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[b-z]\b").expect("lone letter pattern"));

static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\b").expect("numeral pattern"));

fn emit(token: Token, end: usize) -> Option<(Lexeme, usize)> {
    Some((Lexeme::Emit(token), end))
}

fn phrase(text: &str, offset: usize, phrase: &str, token: Token) -> Option<(Lexeme, usize)> {
    if text[offset..].starts_with(phrase) {
        emit(token, offset + phrase.len())
    } else {
        None
    }
}

fn captures<'t>(pattern: &Regex, text: &'t str, offset: usize) -> Option<(Captures<'t>, usize)> {
    let caps = pattern.captures(&text[offset..])?;
    let end = offset + caps.get(0)?.end();
    Some((caps, end))
}

/// True when the character before `offset` cannot be part of the same word
fn at_word_start(text: &str, offset: usize) -> bool {
    text[..offset]
        .chars()
        .next_back()
        .map_or(true, |c| !(c.is_alphanumeric() || matches!(c, '_' | '-' | '\'')))
}

fn item_number(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let (caps, end) = captures(&ITEM_NUMBER, text, offset)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    emit(Token::ItemNumber(number), end)
}

fn object_class(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let (caps, end) = captures(&OBJECT_CLASS, text, offset)?;
    let class: ObjectClass = caps.get(1)?.as_str().parse().ok()?;
    emit(Token::ObjectClass(class), end)
}

fn con_procs_start(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    phrase(
        text,
        offset,
        "Special Containment Procedures:",
        Token::ConProcsStart,
    )
}

fn description_start(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    phrase(text, offset, "Description:", Token::DescriptionStart)
}

fn footnote_start(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    phrase(text, offset, "[[footnote]]", Token::FootnoteStart)
}

fn footnote_end(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    phrase(text, offset, "[[/footnote]]", Token::FootnoteEnd)
}

fn addendum_start(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let (caps, end) = captures(&ADDENDUM, text, offset)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    let letter = caps.get(2).and_then(|m| m.as_str().chars().next());
    emit(Token::AddendumStart { number, letter }, end)
}

fn identifier(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let (caps, end) = captures(&IDENTIFIER, text, offset)?;
    // "the <word> of" names <word>; an SCP-n-n reference names itself
    let name = caps.get(1).or_else(|| caps.get(0))?.as_str().to_string();
    emit(Token::Identifier(name), end)
}

fn constant(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let (caps, end) = captures(&CONSTANT, text, offset)?;
    let value = if caps.get(1).is_some() {
        0
    } else if caps.get(2).is_some() || caps.get(3).is_some() {
        1
    } else {
        caps.get(4)?.as_str().parse().ok()?
    };
    emit(Token::Constant(value), end)
}

/// Fixed vocabulary of verbs, connectives and punctuation
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    #[token("does")]
    Does,
    #[token("has")]
    Has,
    #[token("is")]
    Is,
    #[token(".")]
    Period,
    #[token("the")]
    The,
    #[token("square containment chamber")]
    Square,
    #[token("of")]
    Of,
    #[token("If")]
    If,
    #[token(",")]
    Comma,
    #[token("-----")]
    Hr,
    #[token("will generate a new instance")]
    Increment,
    #[token("See")]
    Goto,
    #[token("in addition to")]
    Add,
    #[token("and")]
    And,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("~~")]
    Tilde2,
    #[token("[!--")]
    CommentStart,
    #[token("--]")]
    CommentEnd,
}

impl Word {
    fn into_token(self) -> Token {
        match self {
            Word::Does => Token::Verb(Verb::Does),
            Word::Has => Token::Verb(Verb::Has),
            Word::Is => Token::Verb(Verb::Is),
            Word::Period => Token::Period,
            Word::The => Token::The,
            Word::Square => Token::Square,
            Word::Of => Token::Of,
            Word::If => Token::If,
            Word::Comma => Token::Comma,
            Word::Hr => Token::Hr,
            Word::Increment => Token::Increment,
            Word::Goto => Token::Goto,
            Word::Add => Token::Add,
            Word::And => Token::And,
            Word::LParen => Token::LParen,
            Word::RParen => Token::RParen,
            Word::Tilde2 => Token::Tilde2,
            Word::CommentStart => Token::CommentStart,
            Word::CommentEnd => Token::CommentEnd,
        }
    }
}

fn vocabulary(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let mut lexer = Word::lexer(&text[offset..]);
    match lexer.next() {
        Some(Ok(word)) if lexer.span().start == 0 => {
            emit(word.into_token(), offset + lexer.span().end)
        }
        _ => None,
    }
}

fn lone_letter(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    if !at_word_start(text, offset) {
        return None;
    }
    let found = LONE_LETTER.find(&text[offset..])?;
    emit(
        Token::Identifier(found.as_str().to_string()),
        offset + found.end(),
    )
}

fn numeral(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    if !at_word_start(text, offset) {
        return None;
    }
    let found = NUMERAL.find(&text[offset..])?;
    let value = found.as_str().parse().ok()?;
    emit(Token::Constant(value), offset + found.end())
}

fn ignore_char(text: &str, offset: usize) -> Option<(Lexeme, usize)> {
    let c = text[offset..].chars().next()?;
    Some((Lexeme::Ignore, offset + c.len_utf8()))
}
