//! Swap moves for match-3 style variants.

use log::debug;

use crate::core::{Grid, GridRng, MatchMode, Position, Tile};
use crate::refill::Refill;

use super::groups::component_at;
use super::report::MoveOutcome;
use super::resolver::MatchResolver;

const RESHUFFLE_ATTEMPTS: usize = 100;

impl MatchResolver {
    /// Swap `from` and `to`, keeping the swap only if it forms a group.
    ///
    /// A valid swap is resolved until stable. Swaps between non-neighbors,
    /// of a cell with itself, involving an empty cell, or of identical cells
    /// are rejected with the input grid. Panics if either position is
    /// outside the grid.
    pub fn apply_move(
        &self,
        grid: &Grid,
        from: Position,
        to: Position,
        refill: &mut impl Refill,
    ) -> MoveOutcome {
        assert!(grid.contains(from), "Position {from} outside {}x{} grid", grid.rows(), grid.cols());
        assert!(grid.contains(to), "Position {to} outside {}x{} grid", grid.rows(), grid.cols());

        let Some(swapped) = self.swap_with_match(grid, from, to) else {
            debug!("rejected swap {} <-> {}", from, to);
            return MoveOutcome::rejected(grid);
        };

        let cascade = self.resolve_until_stable(&swapped, refill);
        MoveOutcome {
            grid: cascade.grid.clone(),
            valid: true,
            cascade: Some(cascade),
        }
    }

    /// Every swap `apply_move` would accept, as `(from, to)` with `from < to`.
    #[must_use]
    pub fn valid_moves(&self, grid: &Grid) -> Vec<(Position, Position)> {
        let adjacency = self.config().adjacency;
        let (rows, cols) = (grid.rows(), grid.cols());

        grid.positions()
            .flat_map(|from| {
                adjacency
                    .swap_neighbors(from, rows, cols)
                    .into_iter()
                    .filter(move |&to| to > from)
                    .map(move |to| (from, to))
            })
            .filter(|&(from, to)| self.swap_with_match(grid, from, to).is_some())
            .collect()
    }

    /// Fill a grid with random tiles that form no qualifying group.
    ///
    /// Cells are filled row-major; each takes the first kind, in a shuffled
    /// order, that does not complete a group with the cells already placed.
    /// Returns `None` when some cell has no such kind (too few kinds for
    /// `min_group_size`).
    pub fn seed_without_matches(
        &self,
        rows: usize,
        cols: usize,
        kind_count: u8,
        rng: &mut GridRng,
    ) -> Option<Grid> {
        let mut grid = Grid::new(rows, cols, kind_count);
        let mut kinds: Vec<u8> = (0..kind_count).collect();

        for pos in grid.positions().collect::<Vec<_>>() {
            rng.shuffle(&mut kinds);
            let kind = kinds.iter().copied().find(|&kind| {
                grid.set(pos, Tile::new(kind).into());
                !self.forms_group_at(&grid, pos)
            })?;
            grid.set(pos, Tile::new(kind).into());
        }
        Some(grid)
    }

    /// Shuffle the occupied tiles of `grid` in place of a stuck board.
    ///
    /// Keeps the empty layout. Accepts the first arrangement with no
    /// qualifying group and at least one valid move, or gives up after a
    /// fixed number of attempts.
    pub fn reshuffle(&self, grid: &Grid, rng: &mut GridRng) -> Option<Grid> {
        let occupied: Vec<Position> = grid
            .positions()
            .filter(|&p| grid.get(p).is_occupied())
            .collect();
        let mut cells: Vec<_> = occupied.iter().map(|&p| grid.get(p)).collect();

        for attempt in 0..RESHUFFLE_ATTEMPTS {
            rng.shuffle(&mut cells);
            let mut candidate = grid.clone();
            for (&pos, &cell) in occupied.iter().zip(&cells) {
                candidate.set(pos, cell);
            }
            if self.find_groups(&candidate).is_empty() && !self.valid_moves(&candidate).is_empty() {
                debug!("reshuffled after {} attempts", attempt + 1);
                return Some(candidate);
            }
        }
        None
    }

    /// The swapped grid, if the swap is legal and forms a group through
    /// `from` or `to`.
    fn swap_with_match(&self, grid: &Grid, from: Position, to: Position) -> Option<Grid> {
        let adjacency = self.config().adjacency;
        if from == to || !adjacency.swap_neighbors(from, grid.rows(), grid.cols()).contains(&to) {
            return None;
        }
        let (a, b) = (grid.get(from), grid.get(to));
        if a.is_empty() || b.is_empty() || a == b {
            return None;
        }

        let mut swapped = grid.clone();
        swapped.swap(from, to);
        (self.forms_group_at(&swapped, from) || self.forms_group_at(&swapped, to)).then_some(swapped)
    }

    fn forms_group_at(&self, grid: &Grid, pos: Position) -> bool {
        let config = self.config();
        match config.match_mode {
            MatchMode::Connected => {
                component_at(grid, pos, config.adjacency, self.matcher()).len() >= config.min_group_size
            }
            MatchMode::Lines => self.find_groups(grid).iter().any(|g| g.contains(pos)),
        }
    }
}
