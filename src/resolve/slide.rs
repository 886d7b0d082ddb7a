//! Slide-and-merge lines (2048 and other merge variants).
//!
//! A line is compacted toward the move direction, then adjacent pairs are
//! merged in compacted order. A merged tile is never merged again in the
//! same slide, so `[2, 2, 4]` becomes `[4, 4]`, not `[8]`.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction, Grid, Tile};

use super::report::{LineSlide, SlideOutcome};
use super::resolver::MatchResolver;

/// Which end of a line tiles slide toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// Toward index 0 (left for rows, up for columns).
    TowardStart,
    /// Toward the last index.
    TowardEnd,
}

impl MatchResolver {
    /// Slide one row or column.
    ///
    /// Without a merge rule the line is only compacted.
    #[must_use]
    pub fn slide_and_merge(&self, line: &[Cell], direction: LineDirection) -> LineSlide {
        let mut tiles: Vec<Tile> = line.iter().filter_map(|c| c.tile().copied()).collect();
        if direction == LineDirection::TowardEnd {
            tiles.reverse();
        }

        let max_level = self.config().max_level;
        let mut cells = Vec::with_capacity(line.len());
        let mut score_delta = 0u64;
        let mut merges = 0;

        let mut i = 0;
        while i < tiles.len() {
            let current = tiles[i];
            let merged = match (self.merger(), tiles.get(i + 1)) {
                (Some(merger), Some(next)) if self.tiles_match(&current, next) => {
                    let tile = merger.merge(&current, next, max_level);
                    score_delta = score_delta.saturating_add(merger.value(&tile));
                    Some(tile)
                }
                _ => None,
            };

            match merged {
                Some(tile) => {
                    cells.push(Cell::Occupied(tile));
                    merges += 1;
                    i += 2;
                }
                None => {
                    cells.push(Cell::Occupied(current));
                    i += 1;
                }
            }
        }
        cells.resize(line.len(), Cell::Empty);

        if direction == LineDirection::TowardEnd {
            cells.reverse();
        }
        let moved = cells != line;

        LineSlide {
            cells,
            score_delta,
            merges,
            moved,
        }
    }

    /// Slide every row (`Left`/`Right`) or column (`Up`/`Down`).
    #[must_use]
    pub fn slide_grid(&self, grid: &Grid, direction: Direction) -> SlideOutcome {
        let towards = match direction {
            Direction::Left | Direction::Up => LineDirection::TowardStart,
            Direction::Right | Direction::Down => LineDirection::TowardEnd,
        };

        let mut next = grid.clone();
        let mut score_delta = 0u64;
        let mut merges = 0;
        let mut moved = false;

        let lines = if direction.is_vertical() { grid.cols() } else { grid.rows() };
        for i in 0..lines {
            let line = if direction.is_vertical() { grid.column(i) } else { grid.row(i) };
            let slide = self.slide_and_merge(&line, towards);
            if !slide.moved {
                continue;
            }
            if direction.is_vertical() {
                next.set_column(i, &slide.cells);
            } else {
                next.set_row(i, &slide.cells);
            }
            score_delta = score_delta.saturating_add(slide.score_delta);
            merges += slide.merges;
            moved = true;
        }

        SlideOutcome {
            grid: next,
            score_delta,
            merges,
            moved,
        }
    }

    /// Check whether any direction changes the grid.
    #[must_use]
    pub fn can_slide(&self, grid: &Grid) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.slide_grid(grid, direction).moved)
    }
}
