//! Match predicates.
//!
//! A `TileMatcher` decides whether two tiles belong to the same group.
//! Grouping compares every candidate against the group's seed tile, so a
//! matcher should behave as an equivalence relation; otherwise group
//! membership depends on scan order.

use crate::core::{MatchRule, Tile};

/// Equality test used for grouping and merging.
pub trait TileMatcher: Send + Sync {
    /// Check whether `a` and `b` belong together.
    fn matches(&self, a: &Tile, b: &Tile) -> bool;
}

impl TileMatcher for MatchRule {
    fn matches(&self, a: &Tile, b: &Tile) -> bool {
        match self {
            MatchRule::SameKind => a.kind == b.kind,
            MatchRule::SameKindAndLevel => a.kind == b.kind && a.level == b.level,
        }
    }
}

impl<F> TileMatcher for F
where
    F: Fn(&Tile, &Tile) -> bool + Send + Sync,
{
    fn matches(&self, a: &Tile, b: &Tile) -> bool {
        self(a, b)
    }
}
