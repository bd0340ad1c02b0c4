//! Delay successors: everything reachable from a letterword by letting time
//! elapse.
//!
//! Time advances a configuration one region at a time via [`otic_ir::Region::next`]
//! until every letter sits in the terminal region `(M,+inf)`. The engine is
//! only defined for the 1–2 letter words the inclusion search produces.

use crate::error::EngineError;
use crate::letter::Letter;
use crate::letterword::Letterword;

/// The full ordered sequence of letterwords reachable from `word` by time
/// elapse, up to and including the all-terminal word.
///
/// For a single-position word both letters share a fractional part and
/// advance together. For a two-position word the front letter is advanced in
/// place while it is a point region; otherwise the rear letter crosses its
/// next integer boundary, its fractional part drops to zero, and it rotates
/// to the front. The terminal word is emitted together with its
/// position-swapped variant to keep the sequence antichain-complete. No
/// duplicates, increasing time order.
pub fn compute_wsucc(word: &Letterword, max_constant: u32) -> Result<Vec<Letterword>, EngineError> {
    match word.positions() {
        [letters] if letters.len() <= 2 => Ok(wsucc_single(letters, max_constant)),
        [first, second] if first.len() == 1 && second.len() == 1 => Ok(wsucc_pair(
            first[0].clone(),
            second[0].clone(),
            max_constant,
        )),
        _ => Err(EngineError::UnsupportedShape {
            positions: word.len(),
            letters: word.letter_count(),
        }),
    }
}

fn advance(letter: &Letter, max_constant: u32) -> Letter {
    Letter::new(letter.location.clone(), letter.region.next(max_constant))
}

fn push_unique(results: &mut Vec<Letterword>, word: Letterword) {
    if !results.contains(&word) {
        results.push(word);
    }
}

fn wsucc_single(letters: &[Letter], max_constant: u32) -> Vec<Letterword> {
    let mut results = Vec::new();
    let mut letters = letters.to_vec();
    while letters.iter().any(|l| !l.region.is_unbounded()) {
        push_unique(&mut results, Letterword::single(letters.clone()));
        letters = letters.iter().map(|l| advance(l, max_constant)).collect();
    }
    push_unique(&mut results, Letterword::single(letters));
    results
}

fn wsucc_pair(mut first: Letter, mut second: Letter, max_constant: u32) -> Vec<Letterword> {
    let mut results = Vec::new();
    while !first.region.is_unbounded() || !second.region.is_unbounded() {
        push_unique(&mut results, Letterword::pair(first.clone(), second.clone()));
        if first.region.is_point() {
            first = advance(&first, max_constant);
        } else {
            // The rear letter crosses next; its fraction becomes zero, so it
            // moves to the front.
            let crossed = advance(&second, max_constant);
            second = first;
            first = crossed;
        }
    }
    let terminal = Letterword::pair(first, second);
    push_unique(&mut results, terminal.clone());
    push_unique(&mut results, terminal.swapped());
    results
}
