//! Refill sources for slots vacated by gravity.
//!
//! Refill is stateful (random generators advance), so it is passed to each
//! resolver call as `&mut impl Refill` rather than stored in the resolver.
//!
//! - `NoRefill`: boards that only ever shrink
//! - `SequenceRefill`: a fixed, repeating list of cells (deterministic tests, replays)
//! - `RandomRefill`: seeded uniform kinds, optionally upgraded to level 1
//! - any `FnMut(Position) -> Cell`
//!
//! Refills must only produce kinds inside the grid's enumeration; writing
//! anything else into a grid panics.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Grid, GridRng, GridRngState, Position, Tile};

/// Supplies new cells for vacated slots.
pub trait Refill {
    /// Produce the cell for the vacated slot at `pos`.
    fn refill(&mut self, pos: Position) -> Cell;
}

impl<F> Refill for F
where
    F: FnMut(Position) -> Cell,
{
    fn refill(&mut self, pos: Position) -> Cell {
        self(pos)
    }
}

/// Leaves vacated slots empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRefill;

impl Refill for NoRefill {
    fn refill(&mut self, _pos: Position) -> Cell {
        Cell::Empty
    }
}

/// Cycles through a fixed list of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRefill {
    cells: Vec<Cell>,
    next: usize,
}

impl SequenceRefill {
    /// Create a refill that yields `cells` in order, wrapping around.
    ///
    /// Panics if `cells` is empty.
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "SequenceRefill needs at least one cell");
        Self { cells, next: 0 }
    }

    /// Number of cells handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl Refill for SequenceRefill {
    fn refill(&mut self, _pos: Position) -> Cell {
        let cell = self.cells[self.next % self.cells.len()];
        self.next += 1;
        cell
    }
}

/// Seeded random refill.
///
/// Every slot gets a uniformly random kind at level 0, or level 1 with
/// probability `upgrade_chance` (2048 spawns a 4 one time in ten).
#[derive(Clone, Debug)]
pub struct RandomRefill {
    rng: GridRng,
    kind_count: u8,
    upgrade_chance: f64,
}

impl RandomRefill {
    /// Create a refill over kinds `0..kind_count`.
    #[must_use]
    pub fn new(seed: u64, kind_count: u8) -> Self {
        Self::from_rng(GridRng::new(seed), kind_count)
    }

    /// Create a refill drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GridRng, kind_count: u8) -> Self {
        assert!(kind_count > 0, "RandomRefill needs at least one kind");
        Self {
            rng,
            kind_count,
            upgrade_chance: 0.0,
        }
    }

    /// Set the probability of producing a level-1 tile.
    #[must_use]
    pub fn with_upgrade_chance(mut self, chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&chance), "upgrade chance must be in [0, 1]");
        self.upgrade_chance = chance;
        self
    }

    /// Draw one random tile.
    pub fn next_tile(&mut self) -> Tile {
        let kind = self.rng.gen_kind(self.kind_count);
        let level = u8::from(self.upgrade_chance > 0.0 && self.rng.gen_bool(self.upgrade_chance));
        Tile::with_level(kind, level)
    }

    /// Place a random tile on a random empty cell of `grid`.
    ///
    /// Returns the chosen position, or `None` if the grid is full.
    pub fn spawn_into(&mut self, grid: &mut Grid) -> Option<Position> {
        let empty = grid.empty_positions();
        let pos = *self.rng.choose(&empty)?;
        grid.set(pos, Cell::Occupied(self.next_tile()));
        Some(pos)
    }

    /// Capture the RNG state (kind count and upgrade chance are not included).
    #[must_use]
    pub fn state(&self) -> GridRngState {
        self.rng.state()
    }
}

impl Refill for RandomRefill {
    fn refill(&mut self, _pos: Position) -> Cell {
        Cell::Occupied(self.next_tile())
    }
}
