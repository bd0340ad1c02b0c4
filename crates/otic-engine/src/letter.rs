//! Letters: the region abstraction of a single timed state.

use serde::Serialize;
use std::fmt;

use otic_ir::{Location, Region, State};

/// A location paired with a region — the image of one concrete timed state
/// under the region abstraction. Immutable, with structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Letter {
    pub location: Location,
    pub region: Region,
}

impl Letter {
    pub fn new(location: Location, region: Region) -> Self {
        Self { location, region }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.location, self.region)
    }
}

/// Abstract a concrete state to its letter under the bound `max_constant`.
pub fn state_to_letter(state: &State, max_constant: u32) -> Letter {
    let region = Region::classify(state.integer(), state.fraction(), max_constant);
    Letter::new(state.location.clone(), region)
}

/// Materialize a concrete representative state inside a letter's region.
///
/// Point regions map to their integer endpoint exactly. Open and unbounded
/// regions map to the lower endpoint plus the fractional offset
/// `(i+1)/(i+2)` for tie-break index `i`, so distinct indices yield distinct
/// clock values inside the same region. Used by learning-style callers to
/// turn a witness letter back into a concrete clock value; the search itself
/// never calls this.
pub fn letter_to_state(letter: &Letter, tie_break: usize) -> State {
    let clock = match letter.region {
        Region::Point(c) => f64::from(c),
        Region::Open(c) | Region::Unbounded(c) => {
            let i = tie_break as f64;
            f64::from(c) + (i + 1.0) / (i + 2.0)
        }
    };
    State::new(letter.location.clone(), clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use otic_ir::Side;

    fn loc(name: &str) -> Location {
        Location::new(name, false, false, Side::A)
    }

    #[test]
    fn state_maps_to_containing_region() {
        let l = state_to_letter(&State::new(loc("q0"), 1.0), 3);
        assert_eq!(l.region, Region::Point(1));
        let l = state_to_letter(&State::new(loc("q0"), 1.5), 3);
        assert_eq!(l.region, Region::Open(1));
        let l = state_to_letter(&State::new(loc("q0"), 3.5), 3);
        assert_eq!(l.region, Region::Unbounded(3));
    }

    #[test]
    fn point_region_round_trips_exactly() {
        let letter = Letter::new(loc("q0"), Region::Point(2));
        let state = letter_to_state(&letter, 0);
        assert_eq!(state.clock, 2.0);
        assert_eq!(state_to_letter(&state, 3), letter);
    }

    #[test]
    fn open_region_round_trips_for_every_tie_break() {
        let letter = Letter::new(loc("q0"), Region::Open(1));
        let mut seen = Vec::new();
        for i in 0..8 {
            let state = letter_to_state(&letter, i);
            assert_eq!(state_to_letter(&state, 3), letter);
            assert!(!seen.contains(&state.clock));
            seen.push(state.clock);
        }
    }

    #[test]
    fn unbounded_region_round_trips() {
        let letter = Letter::new(loc("q0"), Region::Unbounded(2));
        for i in 0..4 {
            let state = letter_to_state(&letter, i);
            assert_eq!(state_to_letter(&state, 2), letter);
        }
    }

    #[test]
    fn display_shows_side_name_and_region() {
        let letter = Letter::new(loc("q0"), Region::Open(0));
        assert_eq!(letter.to_string(), "A.q0,(0,1)");
    }
}
