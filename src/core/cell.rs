//! Cell contents: kinds, levels, tiles.
//!
//! A `Cell` is either `Empty` or holds a `Tile`. A tile has a `Kind`
//! (gem color, puyo color, animal species) and a `level` used by merge
//! games where two equal tiles combine into one of `level + 1`. Pure
//! match-3 boards leave the level at 0.

use serde::{Deserialize, Serialize};

/// Category tag of a tile. Games define what kinds mean.
///
/// Kinds are drawn from a closed enumeration `0..kind_count` fixed when
/// the grid is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Kind(pub u8);

impl Kind {
    /// Create a new kind.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Rank of a tile within its kind.
pub type Level = u8;

/// An occupant of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: Kind,
    pub level: Level,
}

impl Tile {
    /// Create a tile of the given kind at level 0.
    #[must_use]
    pub const fn new(kind: u8) -> Self {
        Self {
            kind: Kind(kind),
            level: 0,
        }
    }

    /// Create a tile with an explicit level.
    #[must_use]
    pub const fn with_level(kind: u8, level: Level) -> Self {
        Self {
            kind: Kind(kind),
            level,
        }
    }
}

/// A grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No occupant.
    #[default]
    Empty,
    /// Holds a tile.
    Occupied(Tile),
}

impl Cell {
    /// Occupied cell of `kind` at level 0.
    #[must_use]
    pub const fn kind(kind: u8) -> Self {
        Cell::Occupied(Tile::new(kind))
    }

    /// Occupied cell of `kind` at `level`.
    #[must_use]
    pub const fn leveled(kind: u8, level: Level) -> Self {
        Cell::Occupied(Tile::with_level(kind, level))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// The tile, if any.
    #[must_use]
    pub const fn tile(&self) -> Option<&Tile> {
        match self {
            Cell::Occupied(tile) => Some(tile),
            Cell::Empty => None,
        }
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        Cell::Occupied(tile)
    }
}

impl From<Option<Tile>> for Cell {
    fn from(tile: Option<Tile>) -> Self {
        tile.map_or(Cell::Empty, Cell::Occupied)
    }
}
