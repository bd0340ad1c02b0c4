//! Proptest strategies for generating well-formed [`Ota`] instances.

use proptest::prelude::*;

use crate::automaton::{Location, Ota, Side, Transition};
use crate::region::regions;

/// Strategy for a small deterministic, complete OTA under the bound `m`.
///
/// Generated automata have:
/// - 1–3 locations, location 0 initial, random accepting flags
/// - the two-letter alphabet {a, b}
/// - exactly one transition per (location, label, region) triple, so every
///   action is enabled in every configuration and the transition function is
///   deterministic
pub fn arb_ota(side: Side, m: u32) -> impl Strategy<Value = Ota> {
    let labels = ["a", "b"];
    (1..=3usize)
        .prop_flat_map(move |nlocs| {
            let nedges = nlocs * labels.len() * regions(m).len();
            let edges = proptest::collection::vec((0..nlocs, any::<bool>()), nedges..=nedges);
            let accepting = proptest::collection::vec(any::<bool>(), nlocs..=nlocs);
            (Just(nlocs), edges, accepting)
        })
        .prop_map(move |(nlocs, edges, accepting)| {
            let prefix = match side {
                Side::A => "q",
                Side::B => "s",
            };
            let locations: Vec<Location> = (0..nlocs)
                .map(|i| Location::new(format!("{prefix}{i}"), i == 0, accepting[i], side))
                .collect();
            let mut transitions = Vec::with_capacity(edges.len());
            let mut edge = edges.into_iter();
            for i in 0..nlocs {
                for label in labels {
                    for guard in regions(m) {
                        let (target, reset) = edge.next().unwrap();
                        transitions.push(Transition::new(
                            format!("{prefix}{i}"),
                            label,
                            guard,
                            reset,
                            format!("{prefix}{target}"),
                        ));
                    }
                }
            }
            Ota::new(
                format!("gen-{prefix}"),
                side,
                locations,
                format!("{prefix}0"),
                transitions,
                labels.iter().map(|l| l.to_string()),
            )
        })
}
