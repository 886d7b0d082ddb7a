//! Grid coordinates, directions and neighbor topologies.
//!
//! ## Coordinates
//!
//! Positions are `(row, col)` with row 0 at the top edge. The derived
//! ordering is row-major, which is the scan order used everywhere a
//! stable output order is needed.
//!
//! ## Hex Layout
//!
//! Hex boards use the "odd-r" offset layout: odd rows are shifted half a
//! cell to the right, as in Bubble Shooter playfields.
//!
//! ```
//! use match_cascade::core::{Adjacency, Position};
//!
//! let neighbors = Adjacency::Hex.neighbors(Position::new(1, 1), 3, 3);
//! assert!(neighbors.contains(&Position::new(0, 2)));
//! assert!(!neighbors.contains(&Position::new(0, 0)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell address on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 is the top edge.
    pub row: usize,
    /// Column index, 0 is the left edge.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this position, returning `None` if the result leaves a
    /// `rows` x `cols` grid.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < rows && col < cols).then_some(Self { row, col })
    }

    /// Step one cell in `direction`, if still on the grid.
    #[must_use]
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col, rows, cols)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four board directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(d_row, d_col)` for a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True for `Up` and `Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Check whether `pos` lies on this edge of a `rows` x `cols` grid.
    #[must_use]
    pub fn contains(self, pos: Position, rows: usize, cols: usize) -> bool {
        match self {
            Edge::Top => pos.row == 0,
            Edge::Bottom => pos.row + 1 == rows,
            Edge::Left => pos.col == 0,
            Edge::Right => pos.col + 1 == cols,
        }
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const DIAGONAL: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const HEX_EVEN_ROW: [(isize, isize); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];
const HEX_ODD_ROW: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Neighbor relation used for grouping and swap legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjacency {
    /// 4-neighbor (up, down, left, right).
    #[default]
    Orthogonal,
    /// 8-neighbor (orthogonal plus diagonals).
    Diagonal,
    /// 6-neighbor on an odd-r offset hex layout.
    Hex,
}

impl Adjacency {
    /// Neighbors of `pos` that lie on a `rows` x `cols` grid, in row-major order.
    #[must_use]
    pub fn neighbors(self, pos: Position, rows: usize, cols: usize) -> SmallVec<[Position; 8]> {
        self.offsets(pos)
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col, rows, cols))
            .collect()
    }

    /// Neighbors a cell may be swapped with.
    ///
    /// Diagonal grouping still only allows orthogonal swaps.
    #[must_use]
    pub fn swap_neighbors(self, pos: Position, rows: usize, cols: usize) -> SmallVec<[Position; 8]> {
        match self {
            Adjacency::Diagonal => Adjacency::Orthogonal.neighbors(pos, rows, cols),
            other => other.neighbors(pos, rows, cols),
        }
    }

    /// Check whether two positions are neighbors.
    #[must_use]
    pub fn are_neighbors(self, a: Position, b: Position, rows: usize, cols: usize) -> bool {
        self.neighbors(a, rows, cols).contains(&b)
    }

    /// Unit steps along which straight runs are counted (one per axis).
    ///
    /// Empty for `Hex`: line matching is unsupported on offset rows and
    /// `ResolverConfig::validate` rejects that combination.
    #[must_use]
    pub fn line_axes(self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::Orthogonal => &[(0, 1), (1, 0)],
            Adjacency::Diagonal => &[(0, 1), (1, 0), (1, 1), (1, -1)],
            Adjacency::Hex => &[],
        }
    }

    fn offsets(self, pos: Position) -> &'static [(isize, isize)] {
        match self {
            Adjacency::Orthogonal => &ORTHOGONAL,
            Adjacency::Diagonal => &DIAGONAL,
            Adjacency::Hex if pos.row % 2 == 1 => &HEX_ODD_ROW,
            Adjacency::Hex => &HEX_EVEN_ROW,
        }
    }
}
