#![doc = include_str!("../README.md")]

//! The inclusion engine.
//!
//! Given automata A and B over a shared clock and alphabet, decide whether
//! every timed word accepted by B is also accepted by A. The state space is
//! the set of letterwords: ordered sequences of (location, region) pairs
//! encoding the relative fractional ordering of the two automata's clocks.
//! [`check_inclusion`] drives the delay- and action-successor engines over
//! this space with antichain pruning.

pub mod action;
pub mod delay;
mod error;
pub mod inclusion;
pub mod letter;
pub mod letterword;

pub use error::EngineError;
pub use inclusion::{check_inclusion, InclusionResult};
pub use letter::{letter_to_state, state_to_letter, Letter};
pub use letterword::{config_to_letterword, Letterword};
