//! Injected grouping and merging rules.
//!
//! - `TileMatcher`: when two tiles count as equal for grouping
//! - `TileMerger`: what two equal tiles become in a slide-and-merge line
//!
//! Built-in rules cover the common variants; closures work for anything else.

pub mod matcher;
pub mod merge;

pub use matcher::TileMatcher;
pub use merge::{face_value, Doubling, TileMerger};
