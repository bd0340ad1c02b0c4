//! Action successors: advancing a letterword through a discrete transition
//! of both automata simultaneously.

use otic_ir::{Ota, Region, Side};

use crate::error::EngineError;
use crate::letter::Letter;
use crate::letterword::Letterword;

/// The successor of a single letter under `action` in `ota`, if the action
/// is enabled.
///
/// Scans the transitions from the letter's location with the matching label
/// and fires the first one whose guard region equals the letter's region. A
/// resetting transition sends the clock to `[0,0]`; otherwise the region is
/// unchanged. `None` means the action is disabled in this configuration,
/// which is a normal outcome.
pub fn immediate_letter_asucc(
    letter: &Letter,
    action: &str,
    ota: &Ota,
) -> Result<Option<Letter>, EngineError> {
    for transition in ota.transitions_from(&letter.location.name, action) {
        if letter.region.subset(&transition.guard) {
            let target = ota.location(&transition.target)?.clone();
            let region = if transition.reset {
                Region::Point(0)
            } else {
                letter.region
            };
            return Ok(Some(Letter::new(target, region)));
        }
    }
    Ok(None)
}

/// All action successors of a letterword: for every action in B's alphabet,
/// both sides' letter successors combined back into a canonical word.
///
/// An action with no successor on either side is skipped. The combination
/// preserves the fractional-ordering shape of the letterword encoding:
/// point regions (fraction zero) come first, and when neither successor is a
/// point the source word's ordering is inherited.
pub fn immediate_asucc(
    word: &Letterword,
    a: &Ota,
    b: &Ota,
) -> Result<Vec<Letterword>, EngineError> {
    let (a_letter, b_letter) = split_sides(word)?;
    let a_first = side_position(word, Side::A) <= side_position(word, Side::B);

    let mut results = Vec::new();
    for action in &b.alphabet {
        let Some(a_succ) = immediate_letter_asucc(a_letter, action, a)? else {
            continue;
        };
        let Some(b_succ) = immediate_letter_asucc(b_letter, action, b)? else {
            continue;
        };
        let next = combine(a_succ, b_succ, word.len(), a_first);
        if !results.contains(&next) {
            results.push(next);
        }
    }
    Ok(results)
}

/// Extract the unique A-side and B-side letters of a 1–2 position word.
fn split_sides(word: &Letterword) -> Result<(&Letter, &Letter), EngineError> {
    let shape_ok = match word.positions() {
        [letters] => letters.len() == 2,
        [first, second] => first.len() == 1 && second.len() == 1,
        _ => false,
    };
    let sides = word.side_letter(Side::A).zip(word.side_letter(Side::B));
    match sides {
        Some(pair) if shape_ok => Ok(pair),
        _ => Err(EngineError::UnsupportedShape {
            positions: word.len(),
            letters: word.letter_count(),
        }),
    }
}

fn side_position(word: &Letterword, side: Side) -> usize {
    word.positions()
        .iter()
        .position(|set| set.iter().any(|l| l.location.side == side))
        .unwrap_or(0)
}

fn combine(a_succ: Letter, b_succ: Letter, source_len: usize, a_first: bool) -> Letterword {
    match (a_succ.region.is_point(), b_succ.region.is_point()) {
        // Both clocks have fraction zero: one shared position.
        (true, true) => Letterword::single(vec![a_succ, b_succ]),
        // The point region's fraction is zero, so it precedes the open one.
        (true, false) => Letterword::pair(a_succ, b_succ),
        (false, true) => Letterword::pair(b_succ, a_succ),
        // Neither reset: fractional parts, and hence the ordering, are
        // inherited from the source word.
        (false, false) => {
            if source_len == 1 {
                Letterword::single(vec![a_succ, b_succ])
            } else if a_first {
                Letterword::pair(a_succ, b_succ)
            } else {
                Letterword::pair(b_succ, a_succ)
            }
        }
    }
}
