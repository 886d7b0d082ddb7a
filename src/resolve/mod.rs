//! Match resolution.
//!
//! `MatchResolver` is the single engine behind every grid variant:
//!
//! - **Cascades** (match-3, Puyo Puyo, Columns, Bubble Shooter, SameGame):
//!   find qualifying groups, remove them, compact, refill, repeat until
//!   nothing matches.
//! - **Swaps** (match-3): `apply_move` keeps a swap only if it creates a match.
//! - **Slides** (2048): `slide_and_merge` compacts a line and merges pairs.
//!
//! Every operation takes `&Grid` and returns a new `Grid`; inputs are never
//! mutated.
//!
//! ## Example Usage
//!
//! ```
//! use match_cascade::core::{Grid, ResolverConfig};
//! use match_cascade::refill::NoRefill;
//! use match_cascade::resolve::{MatchResolver, ResolutionStatus};
//!
//! let resolver = MatchResolver::new(ResolverConfig::puyo()).unwrap();
//! let grid = Grid::from_ascii(2, "
//!     1...
//!     0000
//!     1110
//! ");
//!
//! // The 0s clear, the 1s fall together, then the 1s clear.
//! let cascade = resolver.resolve_until_stable(&grid, &mut NoRefill);
//! assert_eq!(cascade.status, ResolutionStatus::Stable);
//! assert_eq!(cascade.chain(), 2);
//! assert_eq!(cascade.total_cleared, 9);
//! assert_eq!(cascade.grid.occupied_count(), 0);
//! ```

mod groups;
mod gravity;
mod moves;
mod report;
mod resolver;
mod slide;

pub use groups::MatchGroup;
pub use report::{Cascade, GroupSummary, LineSlide, MoveOutcome, PassOutcome, PassReport, SlideOutcome};
pub use resolver::MatchResolver;
pub use slide::LineDirection;

use serde::{Deserialize, Serialize};

/// How a cascade ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// No qualifying group remains.
    Stable,

    /// The pass cap was reached while matches remained. Points at a match
    /// predicate and refill pairing that keeps recreating matches.
    Capped { passes: usize },
}
