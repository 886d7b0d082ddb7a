//! Results handed back to callers.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Grid, Tile};

use super::ResolutionStatus;

/// Size and tile of one cleared group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub tile: Tile,
    pub size: usize,
}

/// What a single clearing pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    /// Groups removed, ordered by first position.
    pub groups: Vec<GroupSummary>,
    /// Cells removed, including dropped ones.
    pub cleared: usize,
    /// Cells removed because they lost contact with the anchor edge.
    pub dropped: usize,
    /// Occupied cells produced by the refill.
    pub refilled: usize,
}

/// Result of `resolve_once`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassOutcome {
    pub grid: Grid,
    pub cleared: usize,
    pub refilled: usize,
    pub report: PassReport,
}

impl PassOutcome {
    pub(crate) fn unchanged(grid: &Grid) -> Self {
        Self {
            grid: grid.clone(),
            cleared: 0,
            refilled: 0,
            report: PassReport::default(),
        }
    }

    /// True when nothing was cleared (the grid is a fixed point).
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.cleared == 0
    }
}

/// Result of `resolve_until_stable`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cascade {
    /// Final grid.
    pub grid: Grid,
    /// Cells cleared across all passes.
    pub total_cleared: usize,
    /// One report per clearing pass, in order.
    pub passes: Vec<PassReport>,
    /// `Stable`, or `Capped` if the pass cap cut resolution short.
    pub status: ResolutionStatus,
    /// Grid after each clearing pass, only when requested.
    pub snapshots: Vec<Grid>,
}

impl Cascade {
    /// Number of clearing passes (the chain length).
    #[must_use]
    pub fn chain(&self) -> usize {
        self.passes.len()
    }

    /// Occupied cells produced by refill across all passes.
    #[must_use]
    pub fn total_refilled(&self) -> usize {
        self.passes.iter().map(|p| p.refilled).sum()
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.status == ResolutionStatus::Stable
    }
}

/// Result of `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Resolved grid if valid, otherwise the untouched input.
    pub grid: Grid,
    pub valid: bool,
    /// Cascade triggered by a valid move.
    pub cascade: Option<Cascade>,
}

impl MoveOutcome {
    pub(crate) fn rejected(grid: &Grid) -> Self {
        Self {
            grid: grid.clone(),
            valid: false,
            cascade: None,
        }
    }

    /// Cells cleared by the move, 0 if invalid.
    #[must_use]
    pub fn total_cleared(&self) -> usize {
        self.cascade.as_ref().map_or(0, |c| c.total_cleared)
    }
}

/// Result of `slide_and_merge` on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSlide {
    pub cells: Vec<Cell>,
    /// Sum of the values of merged tiles.
    pub score_delta: u64,
    pub merges: usize,
    /// Whether the line changed.
    pub moved: bool,
}

/// Result of `slide_grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideOutcome {
    pub grid: Grid,
    pub score_delta: u64,
    pub merges: usize,
    pub moved: bool,
}
