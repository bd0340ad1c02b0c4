//! The region partition of the clock axis.
//!
//! For a maximum constant M, the non-negative reals split into the finite
//! partition `[0,0], (0,1), [1,1], ..., [M,M], (M,+inf)`. Every guard of an
//! automaton under comparison is one of these regions, so two clock values in
//! the same region satisfy exactly the same guards. All of the abstraction
//! work in `otic-engine` reduces to arithmetic over this type.

use serde::Serialize;
use std::fmt;

/// One region of the partition induced by a maximum constant M.
///
/// `Point(c)` is the singleton `[c,c]` for `0 <= c <= M`; `Open(c)` is the
/// open unit interval `(c,c+1)` for `0 <= c < M`; `Unbounded(m)` is
/// `(M,+inf)` and carries M so that display and equality stay
/// self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    /// The singleton `[c,c]`.
    Point(u32),
    /// The open interval `(c,c+1)`.
    Open(u32),
    /// The unbounded interval `(M,+inf)`.
    Unbounded(u32),
}

impl Region {
    /// Whether this region is a single point `[c,c]`.
    pub fn is_point(&self) -> bool {
        matches!(self, Region::Point(_))
    }

    /// Whether this region is the terminal region `(M,+inf)`.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Region::Unbounded(_))
    }

    /// Subset test between two regions of the same partition.
    ///
    /// Distinct regions of one partition are disjoint, so the only subset
    /// relation is equality. Guard satisfaction in the action engine goes
    /// through this test.
    pub fn subset(&self, other: &Region) -> bool {
        self == other
    }

    /// The unique immediate time successor of this region.
    ///
    /// `[c,c]` advances to `(c,c+1)` (to `(M,+inf)` when `c = M`), `(c,c+1)`
    /// advances to `[c+1,c+1]`, and `(M,+inf)` is a fixed point. This is the
    /// sole primitive behind simulated time elapse, so it must be exact.
    pub fn next(&self, max_constant: u32) -> Region {
        match *self {
            Region::Point(c) if c >= max_constant => Region::Unbounded(max_constant),
            Region::Point(c) => Region::Open(c),
            Region::Open(c) => Region::Point(c + 1),
            Region::Unbounded(m) => Region::Unbounded(m),
        }
    }

    /// Map a concrete clock value, split into integer and fractional part,
    /// to the region containing it.
    ///
    /// A zero fraction yields the point region (the terminal region when the
    /// integer part already exceeds M); a non-zero fraction yields the open
    /// interval, clamped to `(M,+inf)` once the integer part reaches M.
    pub fn classify(integer: u32, fraction: f64, max_constant: u32) -> Region {
        if fraction == 0.0 {
            if integer > max_constant {
                Region::Unbounded(max_constant)
            } else {
                Region::Point(integer)
            }
        } else if integer < max_constant {
            Region::Open(integer)
        } else {
            Region::Unbounded(max_constant)
        }
    }

    /// The largest integer endpoint mentioned by this region, used when
    /// deriving the maximum constant of an automaton.
    pub fn max_endpoint(&self) -> u32 {
        match *self {
            Region::Point(c) => c,
            Region::Open(c) => c + 1,
            Region::Unbounded(m) => m,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Region::Point(c) => write!(f, "[{c},{c}]"),
            Region::Open(c) => write!(f, "({},{})", c, c + 1),
            Region::Unbounded(m) => write!(f, "({m},+)"),
        }
    }
}

/// The ordered region partition for a maximum constant M.
///
/// Contains `2M+2` regions: `M+1` points, `M` open unit intervals, and the
/// terminal `(M,+inf)`. Pairwise disjoint, union `[0,+inf)`.
pub fn regions(max_constant: u32) -> Vec<Region> {
    let mut out = Vec::with_capacity(2 * max_constant as usize + 2);
    for c in 0..max_constant {
        out.push(Region::Point(c));
        out.push(Region::Open(c));
    }
    out.push(Region::Point(max_constant));
    out.push(Region::Unbounded(max_constant));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_size_and_order() {
        for m in 0..6 {
            let rs = regions(m);
            assert_eq!(rs.len(), 2 * m as usize + 2);
            assert_eq!(rs[0], Region::Point(0));
            assert_eq!(rs[rs.len() - 1], Region::Unbounded(m));
        }
    }

    #[test]
    fn next_visits_every_region_in_order() {
        for m in 0..6 {
            let rs = regions(m);
            let mut r = Region::Point(0);
            for expected in &rs {
                assert_eq!(r, *expected);
                r = r.next(m);
            }
            // Fixed point at the terminal region.
            assert_eq!(r, Region::Unbounded(m));
            assert_eq!(r.next(m), Region::Unbounded(m));
        }
    }

    #[test]
    fn classify_picks_the_containing_region() {
        assert_eq!(Region::classify(0, 0.0, 3), Region::Point(0));
        assert_eq!(Region::classify(2, 0.0, 3), Region::Point(2));
        assert_eq!(Region::classify(1, 0.4, 3), Region::Open(1));
        assert_eq!(Region::classify(3, 0.4, 3), Region::Unbounded(3));
        assert_eq!(Region::classify(7, 0.2, 3), Region::Unbounded(3));
        // An integer value past M still lies in the terminal region.
        assert_eq!(Region::classify(5, 0.0, 3), Region::Unbounded(3));
    }

    #[test]
    fn subset_is_equality() {
        assert!(Region::Point(1).subset(&Region::Point(1)));
        assert!(!Region::Point(1).subset(&Region::Open(1)));
        assert!(!Region::Open(0).subset(&Region::Unbounded(2)));
    }

    #[test]
    fn display_matches_interval_notation() {
        assert_eq!(Region::Point(2).to_string(), "[2,2]");
        assert_eq!(Region::Open(2).to_string(), "(2,3)");
        assert_eq!(Region::Unbounded(4).to_string(), "(4,+)");
    }
}
