//! Demonstration of the inclusion checker on a pair of small automata.
//!
//! Automaton A accepts "a then b" at any times; automaton B accepts the same
//! language plus a second `a` taken at clock value exactly 1. Run with
//! `RUST_LOG=otic_engine=debug` to watch the search.

use tracing_subscriber::EnvFilter;

use otic_engine::{check_inclusion, InclusionResult};
use otic_ir::region::regions;
use otic_ir::{max_constant_of, Location, Ota, Region, Side, Transition};

fn edges_for_all_regions(
    transitions: &mut Vec<Transition>,
    m: u32,
    source: &str,
    label: &str,
    target: &str,
    reset: bool,
) {
    for guard in regions(m) {
        transitions.push(Transition::new(source, label, guard, reset, target));
    }
}

fn a_then_b(side: Side, prefix: &str, extra_timed_a: bool) -> Ota {
    let m = 1;
    let n = |i: usize| format!("{prefix}{i}");
    let mut locations = vec![
        Location::new(n(0), true, false, side),
        Location::new(n(1), false, false, side),
        Location::new(n(2), false, true, side),
        Location::new(n(3), false, false, side),
    ];
    let mut transitions = Vec::new();
    edges_for_all_regions(&mut transitions, m, &n(0), "a", &n(1), true);
    edges_for_all_regions(&mut transitions, m, &n(0), "b", &n(3), false);
    edges_for_all_regions(&mut transitions, m, &n(1), "b", &n(2), false);
    edges_for_all_regions(&mut transitions, m, &n(1), "a", &n(3), false);
    for loc in [n(2), n(3)] {
        edges_for_all_regions(&mut transitions, m, &loc, "a", &n(3), false);
        edges_for_all_regions(&mut transitions, m, &loc, "b", &n(3), false);
    }
    if extra_timed_a {
        for t in &mut transitions {
            if t.source == n(1) && t.label == "a" && t.guard == Region::Point(1) {
                t.target = n(4);
            }
        }
        edges_for_all_regions(&mut transitions, m, &n(4), "a", &n(3), false);
        edges_for_all_regions(&mut transitions, m, &n(4), "b", &n(3), false);
        locations.push(Location::new(n(4), false, true, side));
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = a_then_b(Side::A, "q", false);
    let b = a_then_b(Side::B, "s", true);
    a.validate()?;
    b.validate()?;
    let m = max_constant_of(&a, &b);

    let result = check_inclusion(m, &a, &b)?;
    println!("L({}) in L({}): {}", b.name, a.name, serde_json::to_string_pretty(&result)?);
    if let InclusionResult::NotIncluded { witness } = &result {
        println!("witness: {witness}");
    }

    let reverse = check_inclusion(m, &b.with_side(Side::A), &a.with_side(Side::B))?;
    println!(
        "L({}) in L({}): {}",
        a.name,
        b.name,
        serde_json::to_string_pretty(&reverse)?
    );
    Ok(())
}
