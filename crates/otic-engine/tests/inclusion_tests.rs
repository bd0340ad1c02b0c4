//! End-to-end inclusion checks on concrete automata.
//!
//! The fixture automata are complete (every location/label/region triple has
//! exactly one transition), so every action is enabled in every
//! configuration and the search semantics do not depend on a missing edge.

use proptest::prelude::*;

use otic_engine::{check_inclusion, InclusionResult};
use otic_ir::proptest_generators::arb_ota;
use otic_ir::region::regions;
use otic_ir::{max_constant_of, Location, Ota, Region, Side, Transition};

const M: u32 = 1;

fn edges_for_all_regions(
    transitions: &mut Vec<Transition>,
    source: &str,
    label: &str,
    target: &str,
    reset: bool,
) {
    for guard in regions(M) {
        transitions.push(Transition::new(source, label, guard, reset, target));
    }
}

/// Accepts exactly "a then b", at any times: init --a(reset)--> mid
/// --b--> acc, everything else falls into a sink.
fn a_then_b(side: Side, prefix: &str) -> Ota {
    let n = |i: usize| format!("{prefix}{i}");
    let locations = vec![
        Location::new(n(0), true, false, side),
        Location::new(n(1), false, false, side),
        Location::new(n(2), false, true, side),
        Location::new(n(3), false, false, side), // sink
    ];
    let mut transitions = Vec::new();
    edges_for_all_regions(&mut transitions, &n(0), "a", &n(1), true);
    edges_for_all_regions(&mut transitions, &n(0), "b", &n(3), false);
    edges_for_all_regions(&mut transitions, &n(1), "b", &n(2), false);
    edges_for_all_regions(&mut transitions, &n(1), "a", &n(3), false);
    for loc in [n(2), n(3)] {
        edges_for_all_regions(&mut transitions, &loc, "a", &n(3), false);
        edges_for_all_regions(&mut transitions, &loc, "b", &n(3), false);
    }
    Ota::new(
        format!("a-then-b-{prefix}"),
        side,
        locations,
        n(0),
        transitions,
        ["a".to_string(), "b".to_string()],
    )
}

/// Like [`a_then_b`] but with one extra accepting edge: a second `a` taken
/// at clock value exactly 1 is accepted.
fn a_then_b_or_timed_a(side: Side, prefix: &str) -> Ota {
    let n = |i: usize| format!("{prefix}{i}");
    let mut ota = a_then_b(side, prefix);
    // Redirect the [1,1]-guarded 'a' edge out of the middle location to a
    // fresh accepting location.
    for t in &mut ota.transitions {
        if t.source == n(1) && t.label == "a" && t.guard == Region::Point(1) {
            t.target = n(4);
        }
    }
    let mut transitions = std::mem::take(&mut ota.transitions);
    edges_for_all_regions(&mut transitions, &n(4), "a", &n(3), false);
    edges_for_all_regions(&mut transitions, &n(4), "b", &n(3), false);
    let mut locations = ota.locations.clone();
    locations.push(Location::new(n(4), false, true, side));
    Ota::new(
        format!("a-then-b-timed-{prefix}"),
        side,
        locations,
        n(0),
        transitions,
        ["a".to_string(), "b".to_string()],
    )
}

#[test]
fn equal_languages_are_included() {
    let a = a_then_b(Side::A, "q");
    let b = a_then_b(Side::B, "s");
    assert_eq!(max_constant_of(&a, &b), M);
    let result = check_inclusion(M, &a, &b).unwrap();
    assert!(result.is_included());
}

#[test]
fn extra_timed_word_breaks_inclusion() {
    let a = a_then_b(Side::A, "q");
    let b = a_then_b_or_timed_a(Side::B, "s");
    let result = check_inclusion(M, &a, &b).unwrap();
    let InclusionResult::NotIncluded { witness } = result else {
        panic!("expected a violation");
    };
    // The witness configuration pairs an accepting B location with a
    // non-accepting A location.
    let b_letter = witness.side_letter(Side::B).expect("B-side letter");
    let a_letter = witness.side_letter(Side::A).expect("A-side letter");
    assert!(b.is_accepting(&b_letter.location.name));
    assert!(!a.is_accepting(&a_letter.location.name));
    assert!(witness.is_bad(&a, &b));
}

#[test]
fn smaller_language_is_included_in_larger() {
    // L(a-then-b) is a subset of the language with the extra timed word.
    let a = a_then_b_or_timed_a(Side::A, "q");
    let b = a_then_b(Side::B, "s");
    let result = check_inclusion(M, &a, &b).unwrap();
    assert!(result.is_included());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn inclusion_is_reflexive(ota in arb_ota(Side::A, 1)) {
        let b = ota.with_side(Side::B);
        let result = check_inclusion(max_constant_of(&ota, &b), &ota, &b).unwrap();
        prop_assert!(result.is_included());
    }

    #[test]
    fn search_terminates_and_witnesses_are_bad(
        a in arb_ota(Side::A, 1),
        b in arb_ota(Side::B, 1),
    ) {
        let m = max_constant_of(&a, &b);
        match check_inclusion(m, &a, &b).unwrap() {
            InclusionResult::Included => {}
            InclusionResult::NotIncluded { witness } => {
                prop_assert!(witness.is_bad(&a, &b));
            }
        }
    }
}
