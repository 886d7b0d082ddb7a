//! The grid value type.
//!
//! A `Grid` is a fixed-size, row-major array of cells backed by an
//! `im::Vector`, so cloning is O(1) and engine operations can hand back
//! fresh grid values without copying the whole board.
//!
//! ## Contract
//!
//! - Dimensions are fixed at creation and never change.
//! - Every occupied cell's kind is `< kind_count`.
//! - Out-of-range positions are programmer errors and panic.
//!
//! ## Text Form
//!
//! Grids can be written as text for tests and debugging: one line per
//! row, `.` for empty cells, a base-36 digit for the kind of a level-0 tile.
//!
//! ```
//! use match_cascade::core::{Cell, Grid, Position};
//!
//! let grid = Grid::from_ascii(3, "
//!     01.
//!     120
//! ");
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.get(Position::new(0, 1)), Cell::kind(1));
//! assert!(grid.get(Position::new(0, 2)).is_empty());
//! ```

use std::ops::Index;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Tile};
use super::position::Position;
use super::rng::GridRng;

/// A fixed-size rectangular board of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr", into = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    kind_count: u8,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Panics if a dimension or `kind_count` is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize, kind_count: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Grid dimensions must be non-zero");
        assert!(kind_count > 0, "Grid needs at least one kind");

        Self {
            rows,
            cols,
            kind_count,
            cells: std::iter::repeat(Cell::Empty).take(rows * cols).collect(),
        }
    }

    /// Build a grid from row vectors.
    ///
    /// Panics if the rows are ragged or any tile's kind is outside
    /// `0..kind_count`.
    #[must_use]
    pub fn from_rows(kind_count: u8, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(height, width, kind_count);

        for (row, cells) in rows.into_iter().enumerate() {
            assert_eq!(cells.len(), width, "Row {row} has {} cells, expected {width}", cells.len());
            for (col, cell) in cells.into_iter().enumerate() {
                grid.set(Position::new(row, col), cell);
            }
        }
        grid
    }

    /// Parse the text form described in the module docs.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    #[must_use]
    pub fn from_ascii(kind_count: u8, text: &str) -> Self {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Cell::Empty,
                        _ => {
                            let kind = c
                                .to_digit(36)
                                .unwrap_or_else(|| panic!("Invalid grid character {c:?}"));
                            Cell::kind(kind as u8)
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(kind_count, rows)
    }

    /// Fill a grid with uniformly random level-0 tiles.
    #[must_use]
    pub fn random(rows: usize, cols: usize, kind_count: u8, rng: &mut GridRng) -> Self {
        let mut grid = Self::new(rows, cols, kind_count);
        grid.cells = (0..rows * cols)
            .map(|_| Cell::Occupied(Tile::new(rng.gen_kind(kind_count))))
            .collect();
        grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Size of the kind enumeration.
    #[must_use]
    pub fn kind_count(&self) -> u8 {
        self.kind_count
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `pos` lies on this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index_of(pos)]
    }

    /// Get the tile at `pos`, if occupied.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.get(pos).tile().copied()
    }

    /// Set the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Cell::Occupied(tile) = cell {
            assert!(
                tile.kind.raw() < self.kind_count,
                "{} outside kind enumeration 0..{}",
                tile.kind,
                self.kind_count
            );
        }
        let index = self.index_of(pos);
        self.cells.set(index, cell);
    }

    /// Swap the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (ia, ib) = (self.index_of(a), self.index_of(b));
        self.cells.swap(ia, ib);
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    /// Positions of all empty cells, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.get(p).is_empty()).collect()
    }

    /// Iterate over cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Copy of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<Cell> {
        (0..self.cols).map(|col| self.get(Position::new(row, col))).collect()
    }

    /// Copy of column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|row| self.get(Position::new(row, col))).collect()
    }

    /// Overwrite row `row` with `cells` (left to right).
    pub fn set_row(&mut self, row: usize, cells: &[Cell]) {
        assert_eq!(cells.len(), self.cols, "Row length mismatch");
        for (col, &cell) in cells.iter().enumerate() {
            self.set(Position::new(row, col), cell);
        }
    }

    /// Overwrite column `col` with `cells` (top to bottom).
    pub fn set_column(&mut self, col: usize, cells: &[Cell]) {
        assert_eq!(cells.len(), self.rows, "Column length mismatch");
        for (row, &cell) in cells.iter().enumerate() {
            self.set(Position::new(row, col), cell);
        }
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "Position {pos} outside {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[self.index_of(pos)]
    }
}

/// One character per cell, the form `from_ascii` reads. Levels are not
/// shown; the alternate form (`{:#}`) writes space-separated
/// `kind` or `kind^level` tokens for merge boards.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leveled = f.alternate();
        for row in 0..self.rows {
            for (col, cell) in self.row(row).into_iter().enumerate() {
                if leveled && col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(tile) => {
                        let c = char::from_digit(u32::from(tile.kind.raw()), 36).unwrap_or('?');
                        if leveled && tile.level > 0 {
                            write!(f, "{c}^{}", tile.level)?;
                        } else {
                            write!(f, "{c}")?;
                        }
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized form; checked on the way back in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    kind_count: u8,
    cells: Vec<Cell>,
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            kind_count: grid.kind_count,
            cells: grid.cells.into_iter().collect(),
        }
    }
}

impl TryFrom<GridRepr> for Grid {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if repr.rows == 0 || repr.cols == 0 || repr.kind_count == 0 {
            return Err("grid dimensions and kind_count must be non-zero".into());
        }
        if repr.cells.len() != repr.rows * repr.cols {
            return Err(format!(
                "expected {} cells for a {}x{} grid, got {}",
                repr.rows * repr.cols,
                repr.rows,
                repr.cols,
                repr.cells.len()
            ));
        }
        if let Some(tile) = repr
            .cells
            .iter()
            .filter_map(Cell::tile)
            .find(|t| t.kind.raw() >= repr.kind_count)
        {
            return Err(format!("{} outside kind enumeration 0..{}", tile.kind, repr.kind_count));
        }

        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            kind_count: repr.kind_count,
            cells: repr.cells.into_iter().collect(),
        })
    }
}
