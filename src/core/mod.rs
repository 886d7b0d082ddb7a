//! Core engine types: positions, cells, grids, RNG, configuration, errors.
//!
//! These are the building blocks every game variant shares. Variants
//! configure the engine via `ResolverConfig` rather than modifying the core.

pub mod position;
pub mod cell;
pub mod grid;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Adjacency, Direction, Edge, Position};
pub use cell::{Cell, Kind, Level, Tile};
pub use grid::Grid;
pub use rng::{GridRng, GridRngState};
pub use config::{Gravity, MatchMode, MatchRule, ResolverConfig};
pub use error::ConfigError;
