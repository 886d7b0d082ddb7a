//! # match-cascade
//!
//! A configurable match-resolution engine for tile-grid puzzle games.
//!
//! ## Design Principles
//!
//! 1. **One Engine, Many Variants**: Match-3, Puyo Puyo, Columns, Bubble
//!    Shooter, SameGame and 2048 differ only in `ResolverConfig` and the
//!    injected rules. No per-game resolution code.
//!
//! 2. **Values, Not Mutation**: Every operation takes `&Grid` and returns a
//!    new `Grid`. Grids use `im-rs` vectors, so snapshots are O(1) clones.
//!
//! 3. **Injected Randomness**: Refill is passed per call. The engine's own
//!    logic is deterministic; swap `RandomRefill` for `SequenceRefill` and
//!    every cascade is reproducible.
//!
//! ## Modules
//!
//! - `core`: Positions, adjacency, cells, grids, RNG, configuration, errors
//! - `rules`: Match predicates and merge rules
//! - `refill`: Refill sources for vacated cells
//! - `resolve`: `MatchResolver` (cascades, swaps, slides)
//! - `scoring`: Chain scoring from pass reports

pub mod core;
pub mod rules;
pub mod refill;
pub mod resolve;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Adjacency, Direction, Edge, Position,
    Cell, Kind, Level, Tile, Grid,
    GridRng, GridRngState,
    Gravity, MatchMode, MatchRule, ResolverConfig, ConfigError,
};

pub use crate::rules::{TileMatcher, TileMerger, Doubling, face_value};

pub use crate::refill::{Refill, NoRefill, SequenceRefill, RandomRefill};

pub use crate::resolve::{
    MatchResolver, ResolutionStatus, MatchGroup,
    Cascade, GroupSummary, PassOutcome, PassReport,
    MoveOutcome, LineDirection, LineSlide, SlideOutcome,
};

pub use crate::scoring::ChainScoring;
