//! Statement productions
//!
//! A statement is the nearest of seven alternatives, all tried from the same position. The
//! lone period is the fallback: a terminator with nothing recognizable in front of it still
//! parses, as an invalid statement, so one bad sentence does not end the block.

use tracing::trace;

use super::document::block;
use super::expressions::{equality, expression};
use super::labels::label;
use super::{constant_value, identifier, verb};
use crate::redacted::ast::{Expression, Statement};
use crate::redacted::lexer::TokenKind;
use crate::redacted::parser::primitives::{Input, Outcome};
use crate::redacted::parser::resolver::{choose_nearest, Candidate};
use crate::redacted::parser::sequence::Sequence;

/// `<identifier> <verb> <constant>.`
pub fn assignment(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    let target = seq.then(identifier)?;
    seq.then(verb)?;
    let value = seq.then(constant_value)?;
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::Assignment {
        target,
        value: Expression::Constant(value),
    })
}

/// `<expression> <verb> <identifier>.`
///
/// Not one of the [`statement`] alternatives; callers that want it invoke it directly.
pub fn reverse_assignment(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    let value = seq.then(expression)?;
    seq.then(verb)?;
    let target = seq.then(identifier)?;
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::Assignment { target, value })
}

/// `<identifier> will generate a new instance.`
pub fn increment(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    let target = seq.then(identifier)?;
    seq.expect(TokenKind::Increment)?;
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::Increment { target })
}

/// `See <label>.`
pub fn goto(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    seq.expect(TokenKind::Goto)?;
    let label = seq.then(label)?;
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::GoTo { label })
}

pub fn expression_statement(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    let expr = seq.then(expression)?;
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::Expression(expr))
}

/// `[!-- ... --]`, the enclosed tokens are skipped
pub fn comment(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    seq.expect(TokenKind::CommentStart)?;
    seq.expect(TokenKind::CommentEnd)?;
    seq.finish(Statement::Comment)
}

pub fn invalid(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input, pos);
    seq.expect(TokenKind::Period)?;
    seq.finish(Statement::Invalid)
}

/// `If <equality>, <block>`
///
/// The body runs to the end of the enclosing block, there is no closing token.
pub fn conditional(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    let mut seq = Sequence::new(input.nested()?, pos);
    seq.expect(TokenKind::If)?;
    let condition = seq.then(equality)?;
    seq.expect(TokenKind::Comma)?;
    let body = seq.then(block)?;
    seq.finish(Statement::Conditional { condition, body })
}

/// Kinds a statement can start with. No statement starts before the first of these.
pub(crate) const STATEMENT_START: &[TokenKind] = &[
    TokenKind::If,
    TokenKind::Identifier,
    TokenKind::Goto,
    TokenKind::The,
    TokenKind::Square,
    TokenKind::Constant,
    TokenKind::LParen,
    TokenKind::CommentStart,
    TokenKind::Period,
];

pub fn statement(input: Input<'_>, pos: usize) -> Outcome<Statement> {
    input.memoized(pos, || {
        trace!(pos, "statement");
        let simple = [
            assignment(input, pos),
            increment(input, pos),
            goto(input, pos),
            expression_statement(input, pos),
            comment(input, pos),
            invalid(input, pos),
        ];
        // A conditional starts at its `If`. Behind the nearest simple statement it cannot win,
        // and parsing it anyway would descend into every later conditional of the document.
        let nearest = simple.iter().flatten().map(|parsed| parsed.start).min();
        let reachable = match (input.peek_start(&[TokenKind::If], pos), nearest) {
            (Some(at), Some(nearest)) => at <= nearest,
            (found, None) => found.is_some(),
            (None, Some(_)) => false,
        };
        let branch = if reachable {
            conditional(input, pos)
        } else {
            None
        };
        choose_nearest(
            std::iter::once(branch)
                .chain(simple)
                .map(Candidate::new),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redacted::ast::{Block, Equality, Label};
    use crate::redacted::lexer::{lex, Token, Verb};
    use crate::redacted::parser::primitives::{TokenStream, MAX_NESTING};

    fn ident(name: &str) -> Token {
        Token::Identifier(name.into())
    }

    fn parse_statement(tokens: Vec<Token>) -> Outcome<Statement> {
        let stream = TokenStream::new(tokens);
        statement(stream.input(), 0)
    }

    #[test]
    fn test_assignment() {
        let parsed = parse_statement(vec![
            ident("x"),
            Token::Verb(Verb::Has),
            Token::Constant(0),
            Token::Period,
        ])
        .unwrap();
        assert_eq!(
            parsed.value,
            Statement::Assignment {
                target: "x".into(),
                value: Expression::Constant(0)
            }
        );
        assert_eq!(parsed.span(), 0..4);
    }

    #[test]
    fn test_increment_beats_expression_statement_on_tie() {
        let parsed = parse_statement(vec![ident("x"), Token::Increment, Token::Period]).unwrap();
        assert_eq!(parsed.value, Statement::Increment { target: "x".into() });
    }

    #[test]
    fn test_goto() {
        let parsed = parse_statement(vec![
            Token::Goto,
            Token::AddendumStart {
                number: 2,
                letter: None,
            },
            Token::Period,
        ])
        .unwrap();
        assert_eq!(
            parsed.value,
            Statement::GoTo {
                label: Label::addendum(2, None)
            }
        );
    }

    #[test]
    fn test_comment_skips_its_contents() {
        let parsed = parse_statement(vec![
            Token::CommentStart,
            ident("x"),
            Token::Period,
            Token::CommentEnd,
        ])
        .unwrap();
        assert_eq!(parsed.value, Statement::Comment);
        assert_eq!(parsed.span(), 0..4);
    }

    #[test]
    fn test_lone_period_is_invalid() {
        let parsed = parse_statement(vec![Token::Comma, Token::Period]).unwrap();
        assert_eq!(parsed.value, Statement::Invalid);
        assert_eq!(parsed.span(), 1..2);
    }

    #[test]
    fn test_expression_statement() {
        let parsed = parse_statement(vec![Token::Square, ident("y"), Token::Period]).unwrap();
        assert_eq!(
            parsed.value,
            Statement::Expression(Expression::square("y"))
        );
    }

    #[test]
    fn test_conditional() {
        let tokens = lex("If x is 1, x will generate a new instance.");
        let parsed = parse_statement(tokens).unwrap();
        assert_eq!(
            parsed.value,
            Statement::Conditional {
                condition: Equality::new(Expression::variable("x"), Expression::Constant(1)),
                body: Block::new(vec![Statement::Increment { target: "x".into() }]),
            }
        );
        assert_eq!(parsed.span(), 0..8);
    }

    #[test]
    fn test_reverse_assignment() {
        let stream = TokenStream::new(lex("GoI-3 is the x of."));
        let parsed = reverse_assignment(stream.input(), 0).unwrap();
        assert_eq!(
            parsed.value,
            Statement::Assignment {
                target: "x".into(),
                value: Expression::Constant(3)
            }
        );
        assert_eq!(parsed.span(), 0..4);
    }

    #[test]
    fn test_far_conditional_is_left_alone() {
        // x++. -----  If x is 1, x++.
        let mut tokens = vec![ident("x"), Token::Increment, Token::Period, Token::Hr];
        tokens.extend(lex("If x is 1, x will generate a new instance."));
        let stream = TokenStream::new(tokens);

        let parsed = statement(stream.input(), 0).unwrap();
        assert_eq!(parsed.value, Statement::Increment { target: "x".into() });
        assert_eq!(parsed.span(), 0..3);
    }

    #[test]
    fn test_conditional_nesting_is_bounded() {
        let source = "If x is 1, x will generate a new instance. ".repeat(100);
        let stream = TokenStream::new(lex(&source));

        let mut parsed = statement(stream.input(), 0).unwrap().value;
        let mut depth = 0;
        while let Statement::Conditional { body, .. } = parsed {
            depth += 1;
            assert_eq!(body.statements[0], Statement::Increment { target: "x".into() });
            parsed = match body.statements.last() {
                Some(last @ Statement::Conditional { .. }) => last.clone(),
                _ => {
                    // innermost body: the first increment, then each remaining sentence
                    // read as `x is 1 ... .`
                    assert_eq!(body.statements.len(), 1 + 100 - MAX_NESTING as usize);
                    assert_eq!(
                        body.statements[1],
                        Statement::Assignment {
                            target: "x".into(),
                            value: Expression::Constant(1)
                        }
                    );
                    break;
                }
            };
        }
        assert_eq!(depth, MAX_NESTING as usize);
    }

    #[test]
    fn test_nothing_to_parse() {
        assert!(parse_statement(vec![Token::Comma, Token::Hr]).is_none());
        assert!(parse_statement(vec![]).is_none());
    }
}
