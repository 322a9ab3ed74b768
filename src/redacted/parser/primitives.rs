//! Token-stream primitives
//!
//! Every grammar rule is a function from an [`Input`] and a position to an [`Outcome`].
//! Positions are plain indices into the token sequence and are never mutated in place: a
//! successful primitive hands back a fresh `next` position, a failed one hands back nothing,
//! which is all the backtracking the grammar needs.
//!
//! Skip-tolerant matching
//!
//!     `match_kind` scans forward from the position until it finds the requested kind.
//!     Tokens in between are background noise. The scan gives up at the end of the stream,
//!     or as soon as it would have to skip over the forbidden kind of the current
//!     [`ParseContext`]. The forbidden kind is how a rule keeps a search from running past a
//!     statement terminator into the next statement.
//!
//! Context scoping
//!
//!     The forbidden kind travels by value inside `Input`. Installing one with
//!     [`with_forbidden_tag`] or [`Input::forbid`] produces a new input for the nested call
//!     and leaves the caller's input untouched, so the previous setting is back in effect on
//!     every exit path, early failures included.
//!
//! Nesting
//!
//!     The context also counts how many self-embedding rules (conditionals, additions,
//!     calls) enclose the current one. Past [`MAX_NESTING`] levels those rules fail instead
//!     of recursing, which keeps the native stack bounded on any input.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ops::Range;

use crate::redacted::ast::{Block, Expression, Statement};
use crate::redacted::lexer::{Token, TokenKind};

/// A successful match: the value, where the consumed span starts after any skipping, and
/// the position right after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub start: usize,
    pub next: usize,
}

impl<T> Parsed<T> {
    pub fn new(value: T, start: usize, next: usize) -> Self {
        Self { value, start, next }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            start: self.start,
            next: self.next,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.next
    }
}

/// `None` is the single failure kind: no match found
pub type Outcome<T> = Option<Parsed<T>>;

/// How many conditionals, additions and calls may enclose one another
pub const MAX_NESTING: u16 = 64;

/// Ambient parse state visible to every nested primitive call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseContext {
    forbidden: Option<TokenKind>,
    depth: u16,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forbidden(&self) -> Option<TokenKind> {
        self.forbidden
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn forbid(self, kind: TokenKind) -> Self {
        Self {
            forbidden: Some(kind),
            ..self
        }
    }

    /// One level deeper, or `None` once [`MAX_NESTING`] is reached
    pub fn nested(self) -> Option<Self> {
        (self.depth < MAX_NESTING).then(|| Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

pub(crate) type MemoKey = (usize, ParseContext);
type MemoTable<T> = RefCell<HashMap<MemoKey, Outcome<T>>>;

/// Per-parse result tables for the rules that get re-entered at the same position
#[derive(Default)]
pub(crate) struct Memo {
    expressions: MemoTable<Expression>,
    statements: MemoTable<Statement>,
    blocks: MemoTable<Block>,
}

/// Values whose rule results are cached per `(position, context)`
pub(crate) trait Memoized: Clone + Sized {
    fn table(memo: &Memo) -> &MemoTable<Self>;
}

impl Memoized for Expression {
    fn table(memo: &Memo) -> &MemoTable<Self> {
        &memo.expressions
    }
}

impl Memoized for Statement {
    fn table(memo: &Memo) -> &MemoTable<Self> {
        &memo.statements
    }
}

impl Memoized for Block {
    fn table(memo: &Memo) -> &MemoTable<Self> {
        &memo.blocks
    }
}

/// The immutable token sequence of one parse, plus the bookkeeping that parse needs
pub struct TokenStream {
    tokens: Vec<Token>,
    furthest: Cell<usize>,
    memo: Memo,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            furthest: Cell::new(0),
            memo: Memo::default(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Input at the root context, no forbidden kind
    pub fn input(&self) -> Input<'_> {
        Input {
            stream: self,
            ctx: ParseContext::new(),
        }
    }

    /// Furthest position any successful match has reached so far. Diagnostic only.
    pub fn furthest(&self) -> usize {
        self.furthest.get()
    }
}

/// A view of the stream under a particular context
#[derive(Clone, Copy)]
pub struct Input<'a> {
    stream: &'a TokenStream,
    ctx: ParseContext,
}

impl<'a> Input<'a> {
    pub fn stream(&self) -> &'a TokenStream {
        self.stream
    }

    pub fn context(&self) -> ParseContext {
        self.ctx
    }

    pub fn len(&self) -> usize {
        self.stream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Same stream, with `kind` as the forbidden kind
    pub fn forbid(self, kind: TokenKind) -> Self {
        Self {
            stream: self.stream,
            ctx: self.ctx.forbid(kind),
        }
    }

    /// Same stream, one nesting level deeper. `None` past [`MAX_NESTING`].
    pub fn nested(self) -> Option<Self> {
        Some(Self {
            stream: self.stream,
            ctx: self.ctx.nested()?,
        })
    }

    /// Position of the first token at or after `pos` whose kind is one of `kinds`.
    ///
    /// Ignores the forbidden kind and records nothing. Any rule whose first step matches one
    /// of `kinds` cannot start before this position, so callers use it to leave out
    /// alternatives that are already beaten.
    pub fn peek_start(&self, kinds: &[TokenKind], pos: usize) -> Option<usize> {
        self.stream
            .tokens()
            .get(pos..)?
            .iter()
            .position(|token| kinds.contains(&token.kind()))
            .map(|offset| pos + offset)
    }

    /// Skip-tolerant match of the first token of `kind` at or after `pos`
    pub fn match_kind(&self, kind: TokenKind, pos: usize) -> Outcome<&'a Token> {
        let tokens = self.stream.tokens();
        let mut cursor = pos;
        while cursor < tokens.len() {
            let token = &tokens[cursor];
            let found = token.kind();
            if found == kind {
                let next = cursor + 1;
                if next > self.stream.furthest.get() {
                    self.stream.furthest.set(next);
                }
                return Some(Parsed::new(token, cursor, next));
            }
            if self.ctx.forbidden == Some(found) {
                return None;
            }
            cursor += 1;
        }
        None
    }

    /// Succeeds iff `pos` is at or past the end. The reported start is the stream length,
    /// so in a nearest-resolved choice any real match wins over the end marker.
    pub fn end_of_stream(&self, pos: usize) -> Outcome<()> {
        let len = self.len();
        if pos >= len {
            Some(Parsed::new((), len, pos))
        } else {
            None
        }
    }

    /// Run `rule` once per `(position, context)` and replay its outcome afterwards
    pub(crate) fn memoized<T: Memoized>(
        &self,
        pos: usize,
        rule: impl FnOnce() -> Outcome<T>,
    ) -> Outcome<T> {
        let key = (pos, self.ctx);
        if let Some(hit) = T::table(&self.stream.memo).borrow().get(&key) {
            return hit.clone();
        }
        let outcome = rule();
        T::table(&self.stream.memo)
            .borrow_mut()
            .insert(key, outcome.clone());
        outcome
    }
}

/// `match(tag, stream, pos)`
pub fn match_token<'a>(input: Input<'a>, kind: TokenKind, pos: usize) -> Outcome<&'a Token> {
    input.match_kind(kind, pos)
}

/// `endOfStream(stream, pos)`
pub fn end_of_stream(input: Input<'_>, pos: usize) -> Outcome<()> {
    input.end_of_stream(pos)
}

/// `withForbiddenTag(tag, body)`: run `body` with `kind` forbidden
pub fn with_forbidden_tag<'a, T>(
    input: Input<'a>,
    kind: TokenKind,
    body: impl FnOnce(Input<'a>) -> T,
) -> T {
    body(input.forbid(kind))
}
