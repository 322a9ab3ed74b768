//! Ambiguity resolver
//!
//! Competing grammar alternatives are all evaluated at the same position and the resolver
//! picks one of the successes by where they landed, not by the order they were listed in.
//!
//! Nearest match
//!
//!     The candidate with the smallest `start` wins outright: the one that had to skip the
//!     least noise to find its first token. Among equal starts the shortest span wins, but
//!     deprioritized candidates never take part in that tie-break. A deprioritized candidate
//!     can still become the provisional best by being strictly nearer, and a later
//!     non-deprioritized candidate with the same start only displaces it with a strictly
//!     shorter span.
//!
//! Longest match
//!
//!     Same outright rule on `start`, ties go to the largest `next` (maximal munch).

use super::primitives::Outcome;

/// One alternative's outcome, possibly marked as lowest priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    outcome: Outcome<T>,
    deprioritized: bool,
}

impl<T> Candidate<T> {
    pub fn new(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            deprioritized: false,
        }
    }

    /// Kept out of tie-breaks on equal starts
    pub fn deprioritized(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            deprioritized: true,
        }
    }

}

impl<T> From<Outcome<T>> for Candidate<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Candidate::new(outcome)
    }
}

/// `chooseNearest`: evaluated in argument order
pub fn choose_nearest<T>(candidates: impl IntoIterator<Item = Candidate<T>>) -> Outcome<T> {
    let mut nearest: Outcome<T> = None;
    for candidate in candidates {
        let Some(parsed) = candidate.outcome else {
            continue;
        };
        let replace = match &nearest {
            None => true,
            Some(best) if parsed.start < best.start => true,
            Some(best) => {
                parsed.start == best.start && parsed.next < best.next && !candidate.deprioritized
            }
        };
        if replace {
            nearest = Some(parsed);
        }
    }
    nearest
}

/// `chooseLongest`: evaluated in argument order. The deprioritized flag plays no part here.
pub fn choose_longest<T>(candidates: impl IntoIterator<Item = Candidate<T>>) -> Outcome<T> {
    let mut longest: Outcome<T> = None;
    for parsed in candidates.into_iter().filter_map(|candidate| candidate.outcome) {
        let replace = match &longest {
            None => true,
            Some(best) => {
                parsed.start < best.start || (parsed.start == best.start && parsed.next > best.next)
            }
        };
        if replace {
            longest = Some(parsed);
        }
    }
    longest
}
