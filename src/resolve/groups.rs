//! Group discovery.
//!
//! Two strategies:
//! - **Connected**: iterative stack flood fill from every unvisited
//!   occupied cell. Each neighbor is compared against the group's seed tile.
//! - **Lines**: maximal straight runs along the adjacency's axes. Runs that
//!   share a cell (L and T shapes) are unioned into one group.
//!
//! Both return groups with row-major sorted positions, ordered by their
//! first position, so output never depends on discovery order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Adjacency, Grid, Position, Tile};
use crate::rules::TileMatcher;

/// A maximal set of connected, matching cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// Tile of the group's first position.
    pub tile: Tile,
    /// Member positions, sorted row-major.
    pub positions: Vec<Position>,
}

impl MatchGroup {
    fn new(tile: Tile, mut positions: Vec<Position>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { tile, positions }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check whether the group contains `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }
}

/// Connected component containing `start`, regardless of size.
///
/// Returns an empty vec if `start` is empty.
pub(crate) fn component_at(
    grid: &Grid,
    start: Position,
    adjacency: Adjacency,
    matcher: &dyn TileMatcher,
) -> Vec<Position> {
    let mut visited = vec![false; grid.len()];
    component_from(grid, start, adjacency, matcher, &mut visited)
}

/// All connected groups of at least `min_size` cells.
pub(crate) fn connected_groups(
    grid: &Grid,
    adjacency: Adjacency,
    matcher: &dyn TileMatcher,
    min_size: usize,
) -> Vec<MatchGroup> {
    let mut visited = vec![false; grid.len()];
    let mut groups = Vec::new();

    for pos in grid.positions() {
        if visited[index(grid, pos)] {
            continue;
        }
        let Some(tile) = grid.tile(pos) else {
            continue;
        };
        let members = component_from(grid, pos, adjacency, matcher, &mut visited);
        if members.len() >= min_size {
            groups.push(MatchGroup::new(tile, members));
        }
    }
    groups
}

fn component_from(
    grid: &Grid,
    start: Position,
    adjacency: Adjacency,
    matcher: &dyn TileMatcher,
    visited: &mut [bool],
) -> Vec<Position> {
    let Some(seed) = grid.tile(start) else {
        return Vec::new();
    };
    let (rows, cols) = (grid.rows(), grid.cols());

    let mut stack = vec![start];
    let mut members = vec![start];
    visited[index(grid, start)] = true;

    while let Some(pos) = stack.pop() {
        for next in adjacency.neighbors(pos, rows, cols) {
            let i = index(grid, next);
            if visited[i] {
                continue;
            }
            if let Some(tile) = grid.tile(next) {
                if matcher.matches(&seed, &tile) {
                    visited[i] = true;
                    stack.push(next);
                    members.push(next);
                }
            }
        }
    }
    members
}

/// Straight runs of at least `min_len`, overlapping runs unioned.
pub(crate) fn line_groups(
    grid: &Grid,
    adjacency: Adjacency,
    matcher: &dyn TileMatcher,
    min_len: usize,
) -> Vec<MatchGroup> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut runs: Vec<Vec<Position>> = Vec::new();

    for &(d_row, d_col) in adjacency.line_axes() {
        for pos in grid.positions() {
            let Some(start) = grid.tile(pos) else {
                continue;
            };
            // Only start counting at the first cell of a run.
            let continues_run = pos
                .offset(-d_row, -d_col, rows, cols)
                .and_then(|prev| grid.tile(prev))
                .is_some_and(|prev| matcher.matches(&start, &prev));
            if continues_run {
                continue;
            }

            let mut run = vec![pos];
            let mut cursor = pos;
            while let Some(next) = cursor.offset(d_row, d_col, rows, cols) {
                match grid.tile(next) {
                    Some(tile) if matcher.matches(&start, &tile) => {
                        run.push(next);
                        cursor = next;
                    }
                    _ => break,
                }
            }
            if run.len() >= min_len {
                runs.push(run);
            }
        }
    }

    union_runs(grid, runs)
}

fn union_runs(grid: &Grid, runs: Vec<Vec<Position>>) -> Vec<MatchGroup> {
    let mut parent: Vec<usize> = (0..runs.len()).collect();
    let mut owner: Vec<Option<usize>> = vec![None; grid.len()];

    for (run_id, run) in runs.iter().enumerate() {
        for &pos in run {
            let i = index(grid, pos);
            match owner[i] {
                Some(other) => union(&mut parent, run_id, other),
                None => owner[i] = Some(run_id),
            }
        }
    }

    let mut by_root: FxHashMap<usize, Vec<Position>> = FxHashMap::default();
    for (run_id, run) in runs.into_iter().enumerate() {
        let root = find(&mut parent, run_id);
        by_root.entry(root).or_default().extend(run);
    }

    let mut groups: Vec<MatchGroup> = by_root
        .into_values()
        .filter_map(|positions| {
            let first = positions.iter().min().copied()?;
            let tile = grid.tile(first)?;
            Some(MatchGroup::new(tile, positions))
        })
        .collect();
    groups.sort_by_key(|g| g.positions[0]);
    groups
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    if ra != rb {
        parent[ra.max(rb)] = ra.min(rb);
    }
}

#[inline]
pub(crate) fn index(grid: &Grid, pos: Position) -> usize {
    pos.row * grid.cols() + pos.col
}
