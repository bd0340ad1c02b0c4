//! One-clock timed automaton value types.
//!
//! An [`Ota`] is a finite automaton over a single clock: every transition
//! carries a guard region and may reset the clock. The inclusion search in
//! `otic-engine` mixes the locations of two automata inside one state space,
//! so each location is tagged with the [`Side`] it belongs to.

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::region::Region;

/// Errors raised while validating or querying an automaton.
#[derive(Debug, Error)]
pub enum AutomatonError {
    #[error("automaton '{automaton}' references unknown location '{location}'")]
    UnknownLocation { automaton: String, location: String },
}

/// Which automaton of an inclusion query a location belongs to.
///
/// `A` is the automaton whose language should contain the other; `B` is the
/// candidate whose words are being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A control state of one automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub name: String,
    pub initial: bool,
    pub accepting: bool,
    pub side: Side,
}

impl Location {
    pub fn new(name: impl Into<String>, initial: bool, accepting: bool, side: Side) -> Self {
        Self {
            name: name.into(),
            initial,
            accepting,
            side,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.side, self.name)
    }
}

/// A guarded edge of the automaton.
///
/// Enabled when the clock lies in `guard`; firing moves control from
/// `source` to `target` and resets the clock to zero iff `reset` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub source: String,
    pub label: String,
    pub guard: Region,
    pub reset: bool,
    pub target: String,
}

impl Transition {
    pub fn new(
        source: impl Into<String>,
        label: impl Into<String>,
        guard: Region,
        reset: bool,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            guard,
            reset,
            target: target.into(),
        }
    }
}

/// A location paired with a concrete clock value.
///
/// States only seed or materialize letters; the search itself never stores
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub location: Location,
    pub clock: f64,
}

impl State {
    pub fn new(location: Location, clock: f64) -> Self {
        Self { location, clock }
    }

    /// Integer part of the clock value.
    pub fn integer(&self) -> u32 {
        self.clock.trunc() as u32
    }

    /// Fractional part of the clock value.
    pub fn fraction(&self) -> f64 {
        self.clock.fract()
    }
}

/// A one-clock timed automaton.
#[derive(Debug, Clone, Serialize)]
pub struct Ota {
    pub name: String,
    pub side: Side,
    pub locations: Vec<Location>,
    pub initial: String,
    pub transitions: Vec<Transition>,
    pub alphabet: IndexSet<String>,
    pub accepting: IndexSet<String>,
}

impl Ota {
    /// Assemble an automaton from its parts. Locations are stamped with
    /// `side`; the accepting-name set is derived from the accepting flags.
    pub fn new(
        name: impl Into<String>,
        side: Side,
        mut locations: Vec<Location>,
        initial: impl Into<String>,
        transitions: Vec<Transition>,
        alphabet: impl IntoIterator<Item = String>,
    ) -> Self {
        for loc in &mut locations {
            loc.side = side;
        }
        let accepting = locations
            .iter()
            .filter(|l| l.accepting)
            .map(|l| l.name.clone())
            .collect();
        Self {
            name: name.into(),
            side,
            locations,
            initial: initial.into(),
            transitions,
            alphabet: alphabet.into_iter().collect(),
            accepting,
        }
    }

    /// Look up a location by name.
    pub fn location(&self, name: &str) -> Result<&Location, AutomatonError> {
        self.locations
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| AutomatonError::UnknownLocation {
                automaton: self.name.clone(),
                location: name.to_string(),
            })
    }

    /// The initial location of the automaton.
    pub fn initial_location(&self) -> Result<&Location, AutomatonError> {
        self.location(&self.initial)
    }

    /// Whether the named location is accepting.
    pub fn is_accepting(&self, name: &str) -> bool {
        self.accepting.contains(name)
    }

    /// Transitions leaving `source` labelled `label`, in declaration order.
    ///
    /// The action engine fires the first transition whose guard matches, so
    /// declaration order is the tie-break between overlapping edges.
    pub fn transitions_from<'a>(
        &'a self,
        source: &'a str,
        label: &'a str,
    ) -> impl Iterator<Item = &'a Transition> {
        self.transitions
            .iter()
            .filter(move |t| t.source == source && t.label == label)
    }

    /// The largest integer endpoint appearing in any guard.
    pub fn max_constant(&self) -> u32 {
        self.transitions
            .iter()
            .map(|t| t.guard.max_endpoint())
            .max()
            .unwrap_or(0)
    }

    /// The same automaton re-tagged for the other side of a comparison, for
    /// callers that use one automaton on both sides of `check_inclusion`.
    pub fn with_side(&self, side: Side) -> Ota {
        Ota::new(
            self.name.clone(),
            side,
            self.locations.clone(),
            self.initial.clone(),
            self.transitions.clone(),
            self.alphabet.iter().cloned(),
        )
    }

    /// Check that the initial location and every transition endpoint resolve.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        self.location(&self.initial)?;
        for t in &self.transitions {
            self.location(&t.source)?;
            self.location(&t.target)?;
        }
        Ok(())
    }
}

/// The shared maximum constant of an inclusion query: the largest guard
/// endpoint across both automata. Every region operation of the comparison
/// uses this bound.
pub fn max_constant_of(a: &Ota, b: &Ota) -> u32 {
    a.max_constant().max(b.max_constant())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_loc_ota() -> Ota {
        let locations = vec![
            Location::new("q0", true, false, Side::A),
            Location::new("q1", false, true, Side::A),
        ];
        let transitions = vec![
            Transition::new("q0", "a", Region::Point(1), true, "q1"),
            Transition::new("q0", "a", Region::Open(1), false, "q0"),
        ];
        Ota::new("demo", Side::A, locations, "q0", transitions, ["a".to_string()])
    }

    #[test]
    fn lookup_and_accepting_set() {
        let ota = two_loc_ota();
        assert!(ota.validate().is_ok());
        assert_eq!(ota.initial_location().unwrap().name, "q0");
        assert!(ota.is_accepting("q1"));
        assert!(!ota.is_accepting("q0"));
        assert!(ota.location("missing").is_err());
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let ota = two_loc_ota();
        let guards: Vec<Region> = ota.transitions_from("q0", "a").map(|t| t.guard).collect();
        assert_eq!(guards, vec![Region::Point(1), Region::Open(1)]);
    }

    #[test]
    fn max_constant_covers_open_upper_endpoint() {
        let ota = two_loc_ota();
        // (1,2) mentions 2 even though 2 appears in no point guard.
        assert_eq!(ota.max_constant(), 2);
    }

    #[test]
    fn validate_rejects_dangling_target() {
        let locations = vec![Location::new("q0", true, false, Side::A)];
        let transitions = vec![Transition::new("q0", "a", Region::Point(0), false, "ghost")];
        let ota = Ota::new("bad", Side::A, locations, "q0", transitions, ["a".to_string()]);
        let err = ota.validate().unwrap_err();
        assert!(matches!(err, AutomatonError::UnknownLocation { .. }));
    }

    #[test]
    fn state_splits_clock_value() {
        let loc = Location::new("q0", true, false, Side::B);
        let s = State::new(loc, 2.25);
        assert_eq!(s.integer(), 2);
        assert!((s.fraction() - 0.25).abs() < 1e-9);
    }
}
