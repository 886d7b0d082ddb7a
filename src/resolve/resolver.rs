//! The resolver and its cascade loop.

use log::{debug, trace, warn};

use crate::core::{Cell, ConfigError, Gravity, Grid, MatchMode, Position, ResolverConfig, Tile};
use crate::refill::{NoRefill, Refill};
use crate::rules::{Doubling, TileMatcher, TileMerger};

use super::gravity::{collapse_empty_columns, compact, drop_unanchored};
use super::groups::{component_at, connected_groups, index, line_groups, MatchGroup};
use super::report::{Cascade, GroupSummary, PassOutcome, PassReport};
use super::ResolutionStatus;

/// Configurable grid match-resolution engine.
///
/// Holds the variant's configuration, its match predicate, and an optional
/// merge rule. Holds no grid state; every call gets its own grid.
///
/// ## Behavior
///
/// - `resolve_once()`: one remove/compact/refill pass
/// - `resolve_until_stable()`: passes until nothing matches, bounded by the pass cap
/// - `apply_move()`: swap two neighbors, keep the swap only if it matches
/// - `slide_and_merge()`: 2048-style line move
pub struct MatchResolver {
    config: ResolverConfig,
    matcher: Box<dyn TileMatcher>,
    merger: Option<Box<dyn TileMerger>>,
}

impl MatchResolver {
    /// Create a resolver using `config.match_rule` and no merge rule.
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            matcher: Box::new(config.match_rule),
            merger: None,
            config,
        })
    }

    /// Create a resolver that merges with `Doubling`.
    pub fn merging(config: ResolverConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config)?.with_merger(Doubling))
    }

    /// Replace the match predicate.
    #[must_use]
    pub fn with_matcher(mut self, matcher: impl TileMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Set the merge rule used by `slide_and_merge`.
    #[must_use]
    pub fn with_merger(mut self, merger: impl TileMerger + 'static) -> Self {
        self.merger = Some(Box::new(merger));
        self
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub(crate) fn matcher(&self) -> &dyn TileMatcher {
        self.matcher.as_ref()
    }

    pub(crate) fn merger(&self) -> Option<&dyn TileMerger> {
        self.merger.as_deref()
    }

    /// Check whether two tiles match under this resolver's predicate.
    #[must_use]
    pub fn tiles_match(&self, a: &Tile, b: &Tile) -> bool {
        self.matcher.matches(a, b)
    }

    /// All qualifying groups, ordered by first position.
    #[must_use]
    pub fn find_groups(&self, grid: &Grid) -> Vec<MatchGroup> {
        let config = &self.config;
        match config.match_mode {
            MatchMode::Connected => connected_groups(
                grid,
                config.adjacency,
                self.matcher(),
                config.min_group_size,
            ),
            MatchMode::Lines => {
                line_groups(grid, config.adjacency, self.matcher(), config.min_group_size)
            }
        }
    }

    /// Connected group containing `pos` regardless of size, sorted row-major.
    #[must_use]
    pub fn group_at(&self, grid: &Grid, pos: Position) -> Vec<Position> {
        let mut group = component_at(grid, pos, self.config.adjacency, self.matcher());
        group.sort_unstable();
        group
    }

    /// Run one resolution pass.
    ///
    /// Removes every qualifying group, then drops unanchored cells, applies
    /// gravity, refills and collapses columns as configured. Returns the
    /// input unchanged with `cleared == 0` when nothing matches.
    pub fn resolve_once(&self, grid: &Grid, refill: &mut impl Refill) -> PassOutcome {
        let groups = self.find_groups(grid);
        if groups.is_empty() {
            return PassOutcome::unchanged(grid);
        }
        self.clear_groups(grid, &groups, refill)
    }

    /// Tap-to-clear (SameGame, PopStar): remove the group at `pos` if it
    /// is large enough, then settle the board.
    pub fn clear_group_at(&self, grid: &Grid, pos: Position, refill: &mut impl Refill) -> PassOutcome {
        let positions = self.group_at(grid, pos);
        if positions.len() < self.config.min_group_size {
            return PassOutcome::unchanged(grid);
        }
        let Some(tile) = grid.tile(pos) else {
            return PassOutcome::unchanged(grid);
        };
        let group = MatchGroup { tile, positions };
        self.clear_groups(grid, std::slice::from_ref(&group), refill)
    }

    fn clear_groups(&self, grid: &Grid, groups: &[MatchGroup], refill: &mut dyn Refill) -> PassOutcome {
        let config = &self.config;
        let mut next = grid.clone();
        let mut vacated = vec![false; grid.len()];

        for pos in groups.iter().flat_map(|g| g.positions.iter().copied()) {
            vacated[index(grid, pos)] = true;
            next.set(pos, Cell::Empty);
        }
        let removed = vacated.iter().filter(|&&v| v).count();

        let dropped = match config.anchor {
            Some(edge) => {
                let dropped = drop_unanchored(&mut next, config.adjacency, edge);
                for &pos in &dropped {
                    vacated[index(grid, pos)] = true;
                }
                dropped.len()
            }
            None => 0,
        };

        let refilled = compact(&mut next, config.gravity, &vacated, refill);
        if config.collapse_empty_columns {
            collapse_empty_columns(&mut next);
        }

        let cleared = removed + dropped;
        trace!(
            "pass cleared {} cells in {} groups ({} dropped), refilled {}",
            cleared,
            groups.len(),
            dropped,
            refilled
        );

        PassOutcome {
            grid: next,
            cleared,
            refilled,
            report: PassReport {
                groups: groups
                    .iter()
                    .map(|g| GroupSummary {
                        tile: g.tile,
                        size: g.len(),
                    })
                    .collect(),
                cleared,
                dropped,
                refilled,
            },
        }
    }

    /// Resolve passes until nothing matches.
    ///
    /// Bounded by `config.pass_cap`; hitting the cap with matches left
    /// yields `ResolutionStatus::Capped`.
    pub fn resolve_until_stable(&self, grid: &Grid, refill: &mut impl Refill) -> Cascade {
        self.cascade(grid, refill, false)
    }

    /// Like `resolve_until_stable`, also recording the grid after each
    /// clearing pass for callers that animate the cascade.
    pub fn resolve_until_stable_with_snapshots(&self, grid: &Grid, refill: &mut impl Refill) -> Cascade {
        self.cascade(grid, refill, true)
    }

    /// Settle a freshly placed tile and resolve the resulting cascade.
    ///
    /// Falling variants (Puyo, Columns) write the tile at `pos`, apply
    /// gravity without refill, then resolve the whole board. Sticking
    /// variants (an anchor edge or no gravity, as in Bubble Shooter) leave
    /// the tile where it lands and clear only its own group, followed by
    /// the anchor drop. Panics if `pos` is occupied or off the grid.
    pub fn insert_and_resolve(
        &self,
        grid: &Grid,
        pos: Position,
        tile: Tile,
        refill: &mut impl Refill,
    ) -> Cascade {
        assert!(grid.get(pos).is_empty(), "Cannot insert onto occupied cell {pos}");

        let mut placed = grid.clone();
        placed.set(pos, tile.into());

        if self.config.anchor.is_some() || self.config.gravity == Gravity::None {
            let outcome = self.clear_group_at(&placed, pos, refill);
            debug!("shot at {} cleared {} cells", pos, outcome.cleared);
            let passes = if outcome.cleared > 0 { vec![outcome.report] } else { Vec::new() };
            return Cascade {
                grid: outcome.grid,
                total_cleared: outcome.cleared,
                passes,
                status: ResolutionStatus::Stable,
                snapshots: Vec::new(),
            };
        }

        let untouched = vec![false; placed.len()];
        compact(&mut placed, self.config.gravity, &untouched, &mut NoRefill);

        self.cascade(&placed, refill, false)
    }

    fn cascade(&self, grid: &Grid, refill: &mut dyn Refill, record: bool) -> Cascade {
        let cap = self.config.pass_cap(grid.len());
        let mut current = grid.clone();
        let mut total_cleared = 0;
        let mut passes = Vec::new();
        let mut snapshots = Vec::new();

        let status = loop {
            if passes.len() == cap {
                if self.find_groups(&current).is_empty() {
                    break ResolutionStatus::Stable;
                }
                warn!(
                    "cascade stopped at the {}-pass cap with matches remaining ({} cells cleared)",
                    cap, total_cleared
                );
                break ResolutionStatus::Capped { passes: cap };
            }

            let groups = self.find_groups(&current);
            if groups.is_empty() {
                break ResolutionStatus::Stable;
            }
            let outcome = self.clear_groups(&current, &groups, refill);
            total_cleared += outcome.cleared;
            passes.push(outcome.report);
            current = outcome.grid;
            if record {
                snapshots.push(current.clone());
            }
        };

        debug!(
            "cascade finished after {} passes, {} cells cleared",
            passes.len(),
            total_cleared
        );

        Cascade {
            grid: current,
            total_cleared,
            passes,
            status,
            snapshots,
        }
    }
}

impl std::fmt::Debug for MatchResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchResolver")
            .field("config", &self.config)
            .field("has_merger", &self.merger.is_some())
            .finish_non_exhaustive()
    }
}
