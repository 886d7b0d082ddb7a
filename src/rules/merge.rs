//! Merge rules for slide-and-merge lines.

use crate::core::{Level, Tile};

/// Combines two matching tiles into one.
pub trait TileMerger: Send + Sync {
    /// Produce the merged tile. Levels must not exceed `max_level`.
    fn merge(&self, a: &Tile, b: &Tile, max_level: Level) -> Tile;

    /// Score value of a produced tile.
    ///
    /// Defaults to the 2048 face value: `2^(level + 1)`.
    fn value(&self, tile: &Tile) -> u64 {
        face_value(tile.level)
    }
}

/// 2048-style merge: one level up, same kind, capped at the maximum level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doubling;

impl TileMerger for Doubling {
    fn merge(&self, a: &Tile, _b: &Tile, max_level: Level) -> Tile {
        Tile {
            kind: a.kind,
            level: a.level.saturating_add(1).min(max_level),
        }
    }
}

impl<F> TileMerger for F
where
    F: Fn(&Tile, &Tile, Level) -> Tile + Send + Sync,
{
    fn merge(&self, a: &Tile, b: &Tile, max_level: Level) -> Tile {
        self(a, b, max_level)
    }
}

/// Face value of a level: level 0 is 2, level 1 is 4, and so on.
#[must_use]
pub fn face_value(level: Level) -> u64 {
    1u64.checked_shl(u32::from(level) + 1).unwrap_or(u64::MAX)
}
