//! Resolver configuration.
//!
//! Games configure the engine per variant rather than re-implementing
//! matching logic. A `ResolverConfig` fixes:
//! - how cells group (`Adjacency`, `MatchMode`, `MatchRule`, `min_group_size`)
//! - what happens after removal (`Gravity`, `anchor`, `collapse_empty_columns`)
//! - limits (`max_level`, `max_passes`)
//!
//! Presets cover the common variants; everything else goes through the
//! `with_*` builders or a TOML file:
//!
//! ```
//! use match_cascade::core::{Adjacency, ResolverConfig};
//!
//! let config = ResolverConfig::from_toml_str(r#"
//!     min_group_size = 4
//!     adjacency = "Hex"
//! "#).unwrap();
//! assert_eq!(config.min_group_size, 4);
//! assert_eq!(config.adjacency, Adjacency::Hex);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::{Adjacency, Edge};

/// How qualifying groups are found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Maximal connected groups (flood fill).
    #[default]
    Connected,
    /// Straight runs along the adjacency's axes (classic match-3, Columns).
    Lines,
}

/// Built-in equality tests for grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchRule {
    /// Tiles match when their kinds are equal.
    #[default]
    SameKind,
    /// Tiles match when kind and level are both equal (merge games).
    SameKindAndLevel,
}

/// Direction occupied cells compact toward after removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gravity {
    /// Toward the bottom row (vertical boards).
    #[default]
    Down,
    Up,
    Left,
    Right,
    /// No compaction; vacated cells stay empty and are never refilled.
    None,
}

/// Complete resolver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum group size that counts as a match (>= 2).
    pub min_group_size: usize,

    /// Neighbor topology for grouping and swaps.
    pub adjacency: Adjacency,

    /// Flood-fill groups or straight runs.
    pub match_mode: MatchMode,

    /// Built-in match predicate. Custom predicates are injected on the resolver.
    pub match_rule: MatchRule,

    /// Compaction direction after removal.
    pub gravity: Gravity,

    /// Edge floating cells must connect to. Cells cut off from it are
    /// dropped after each clear. Requires `Gravity::None`.
    pub anchor: Option<Edge>,

    /// Remove fully empty columns after gravity, shifting the rest toward
    /// column 0. Requires `Gravity::Down`.
    pub collapse_empty_columns: bool,

    /// Highest level a merge can produce.
    pub max_level: u8,

    /// Hard cap on cascade passes. `None` uses `ceil(cells / min_group_size)`.
    pub max_passes: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            adjacency: Adjacency::Orthogonal,
            match_mode: MatchMode::Connected,
            match_rule: MatchRule::SameKind,
            gravity: Gravity::Down,
            anchor: None,
            collapse_empty_columns: false,
            max_level: 15,
            max_passes: None,
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with the given minimum group size.
    pub fn new(min_group_size: usize) -> Self {
        Self {
            min_group_size,
            ..Self::default()
        }
    }

    /// Swap-based match-3: straight runs of 3, orthogonal.
    pub fn match3() -> Self {
        Self::new(3).with_match_mode(MatchMode::Lines)
    }

    /// Puyo Puyo: connected groups of 4, orthogonal, falling.
    pub fn puyo() -> Self {
        Self::new(4)
    }

    /// Columns: straight runs of 3 including diagonals.
    pub fn columns() -> Self {
        Self::new(3)
            .with_adjacency(Adjacency::Diagonal)
            .with_match_mode(MatchMode::Lines)
    }

    /// Bubble Shooter: hex groups of 3 anchored to the top edge, no gravity.
    pub fn bubble_shooter() -> Self {
        Self::new(3)
            .with_adjacency(Adjacency::Hex)
            .with_gravity(Gravity::None)
            .with_anchor(Edge::Top)
    }

    /// SameGame / PopStar: any connected pair clears, columns collapse left.
    pub fn same_game() -> Self {
        Self::new(2).collapse_empty_columns()
    }

    /// 2048-style merging: pairs of equal kind and level.
    pub fn merge() -> Self {
        Self::new(2)
            .with_match_rule(MatchRule::SameKindAndLevel)
            .with_max_level(16)
    }

    #[must_use]
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    #[must_use]
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub fn with_match_rule(mut self, rule: MatchRule) -> Self {
        self.match_rule = rule;
        self
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, edge: Edge) -> Self {
        self.anchor = Some(edge);
        self
    }

    #[must_use]
    pub fn collapse_empty_columns(mut self) -> Self {
        self.collapse_empty_columns = true;
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.max_level = level;
        self
    }

    #[must_use]
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Pass cap for a grid with `cell_count` cells.
    #[must_use]
    pub fn pass_cap(&self, cell_count: usize) -> usize {
        self.max_passes
            .unwrap_or_else(|| cell_count.div_ceil(self.min_group_size.max(1)))
            .max(1)
    }

    /// Parse a TOML document and validate it. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_group_size < 2 {
            return Err(ConfigError::Validation("min_group_size must be >= 2".into()));
        }
        if self.max_passes == Some(0) {
            return Err(ConfigError::Validation("max_passes must be > 0".into()));
        }
        if self.match_mode == MatchMode::Lines && self.adjacency == Adjacency::Hex {
            return Err(ConfigError::Validation(
                "Lines match mode is not supported on hex adjacency".into(),
            ));
        }
        if self.anchor.is_some() && self.gravity != Gravity::None {
            return Err(ConfigError::Validation("anchor requires gravity = None".into()));
        }
        if self.collapse_empty_columns && self.gravity != Gravity::Down {
            return Err(ConfigError::Validation(
                "collapse_empty_columns requires gravity = Down".into(),
            ));
        }
        Ok(())
    }
}
