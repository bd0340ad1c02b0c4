//! Letterwords: ordered letter-sets encoding two synchronized configurations.
//!
//! A letterword abstracts a pair of one-clock configurations (one run of A,
//! one run of B) into a sequence of letter-sets ordered by the fractional
//! parts of the underlying clock values. Letters share a position exactly
//! when their clocks share a fractional part. The inclusion search only ever
//! builds words with one or two letters; [`config_to_letterword`] also
//! accepts the arbitrary-size configurations used by learning-style callers.

use serde::Serialize;
use std::fmt;

use otic_ir::{Ota, Side, State};

use crate::letter::{state_to_letter, Letter};

/// An ordered sequence of letter-sets.
///
/// Each position is stored sorted, so equality and hashing are structural
/// and positional with set semantics per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Letterword {
    positions: Vec<Vec<Letter>>,
}

impl Letterword {
    /// Build a letterword, canonicalizing every position.
    pub fn new(positions: Vec<Vec<Letter>>) -> Self {
        let positions = positions
            .into_iter()
            .map(|mut set| {
                set.sort();
                set.dedup();
                set
            })
            .collect();
        Self { positions }
    }

    /// A single-position word.
    pub fn single(letters: Vec<Letter>) -> Self {
        Self::new(vec![letters])
    }

    /// A two-position word with one letter per position.
    pub fn pair(first: Letter, second: Letter) -> Self {
        Self::new(vec![vec![first], vec![second]])
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total number of letters across all positions.
    pub fn letter_count(&self) -> usize {
        self.positions.iter().map(Vec::len).sum()
    }

    pub fn positions(&self) -> &[Vec<Letter>] {
        &self.positions
    }

    /// All letters, in position order.
    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.positions.iter().flatten()
    }

    /// The letter belonging to the given automaton side, if present.
    pub fn side_letter(&self, side: Side) -> Option<&Letter> {
        self.letters().find(|l| l.location.side == side)
    }

    /// The word with its two positions exchanged. Only meaningful for the
    /// two-position delay sequence.
    pub fn swapped(&self) -> Self {
        let mut positions = self.positions.clone();
        positions.reverse();
        Self { positions }
    }

    /// Whether this word witnesses a violation of `L(B) ⊆ L(A)`: the B-side
    /// location is accepting in B while the A-side location is not accepting
    /// in A.
    pub fn is_bad(&self, a: &Ota, b: &Ota) -> bool {
        let Some(b_letter) = self.side_letter(Side::B) else {
            return false;
        };
        let Some(a_letter) = self.side_letter(Side::A) else {
            return false;
        };
        b.is_accepting(&b_letter.location.name) && !a.is_accepting(&a_letter.location.name)
    }

    /// Whether `self` is dominated by `other` (`self <= other`).
    ///
    /// Greedy left-to-right matching: each position of `self` is matched to
    /// the earliest not-yet-used position of `other` whose letter-set
    /// contains it as a subset. No backtracking is needed because both words
    /// are ordered by fractional part.
    pub fn dominated_by(&self, other: &Letterword) -> bool {
        let mut from = 0;
        for set in &self.positions {
            let mut matched = false;
            for (i, candidate) in other.positions.iter().enumerate().skip(from) {
                if is_subset(set, candidate) {
                    from = i + 1;
                    matched = true;
                    break;
                }
            }
            if !matched {
                return false;
            }
        }
        true
    }
}

fn is_subset(inner: &[Letter], outer: &[Letter]) -> bool {
    inner.iter().all(|l| outer.contains(l))
}

impl fmt::Display for Letterword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{")?;
            for (j, letter) in set.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

/// Canonical letterword of a mixed configuration: the A-side states plus the
/// single B-side state, sorted by clock fraction, with equal fractions
/// sharing a position.
pub fn config_to_letterword(a_states: &[State], b_state: &State, max_constant: u32) -> Letterword {
    let mut all: Vec<&State> = a_states.iter().collect();
    all.push(b_state);
    all.sort_by(|x, y| x.fraction().total_cmp(&y.fraction()));

    let mut positions: Vec<Vec<Letter>> = Vec::new();
    let mut current_fraction = f64::NEG_INFINITY;
    for state in all {
        let letter = state_to_letter(state, max_constant);
        if state.fraction() == current_fraction {
            if let Some(set) = positions.last_mut() {
                set.push(letter);
            }
        } else {
            current_fraction = state.fraction();
            positions.push(vec![letter]);
        }
    }
    Letterword::new(positions)
}
