//! The antichain inclusion search.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use otic_ir::{Ota, Region};

use crate::action::immediate_asucc;
use crate::delay::compute_wsucc;
use crate::error::EngineError;
use crate::letter::Letter;
use crate::letterword::Letterword;

/// Outcome of an inclusion check.
#[derive(Debug, Clone, Serialize)]
pub enum InclusionResult {
    /// `L(B) ⊆ L(A)`.
    Included,
    /// `L(B) ⊄ L(A)`, with the letterword witnessing the violation. A caller
    /// driving a learning loop translates the witness back into a concrete
    /// counterexample timed word.
    NotIncluded { witness: Letterword },
}

impl InclusionResult {
    pub fn is_included(&self) -> bool {
        matches!(self, InclusionResult::Included)
    }
}

/// Decide whether every timed word accepted by `b` is accepted by `a`.
///
/// `max_constant` is the shared bound of the comparison: the largest guard
/// endpoint across both automata (see [`otic_ir::automaton::max_constant_of`]).
/// Explores the letterwords reachable from both automata's initial locations
/// at clock zero, breadth first, pruning words dominated by an
/// already-explored word. Terminates on any finite input because the set of
/// letterwords over the region partition is finite and subsumed words are
/// never re-expanded.
pub fn check_inclusion(
    max_constant: u32,
    a: &Ota,
    b: &Ota,
) -> Result<InclusionResult, EngineError> {
    let initial = Letterword::single(vec![
        Letter::new(a.initial_location()?.clone(), Region::Point(0)),
        Letter::new(b.initial_location()?.clone(), Region::Point(0)),
    ]);

    let mut to_explore: VecDeque<Letterword> = VecDeque::new();
    let mut queued: HashSet<Letterword> = HashSet::new();
    let mut explored: Vec<Letterword> = Vec::new();

    queued.insert(initial.clone());
    to_explore.push_back(initial);

    debug!(a = %a.name, b = %b.name, max_constant, "starting inclusion search");

    while let Some(word) = to_explore.pop_front() {
        if word.is_bad(a, b) {
            debug!(witness = %word, explored = explored.len(), "found bad letterword");
            return Ok(InclusionResult::NotIncluded { witness: word });
        }
        if explored.iter().any(|seen| word.dominated_by(seen)) {
            trace!(%word, "dominated, pruned");
            continue;
        }
        for delayed in compute_wsucc(&word, max_constant)? {
            for successor in immediate_asucc(&delayed, a, b)? {
                if queued.insert(successor.clone()) {
                    to_explore.push_back(successor);
                }
            }
        }
        trace!(%word, frontier = to_explore.len(), "expanded");
        explored.push(word);
    }

    debug!(explored = explored.len(), "inclusion holds");
    Ok(InclusionResult::Included)
}
