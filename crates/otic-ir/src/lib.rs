#![doc = include_str!("../README.md")]

//! One-clock timed automaton IR.
//!
//! This crate defines the region partition of the non-negative clock axis,
//! the automaton value types (locations, guarded transitions, concrete timed
//! states), and validation. The inclusion decision procedure itself lives in
//! `otic-engine`.

pub mod automaton;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest_generators;
pub mod region;

pub use automaton::{max_constant_of, AutomatonError, Location, Ota, Side, State, Transition};
pub use region::Region;
