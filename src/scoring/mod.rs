//! Chain scoring.
//!
//! Scores are computed from `PassReport`s after the fact, so the resolver
//! itself stays free of game economics. `chain` is 1 for the first
//! clearing pass of a cascade.
//!
//! ```
//! use match_cascade::resolve::{GroupSummary, PassReport};
//! use match_cascade::core::Tile;
//! use match_cascade::scoring::ChainScoring;
//!
//! let report = PassReport {
//!     groups: vec![GroupSummary { tile: Tile::new(0), size: 4 }],
//!     cleared: 4,
//!     ..PassReport::default()
//! };
//! // A plain 4-group on the first chain scores 10 * 4 * 1.
//! assert_eq!(ChainScoring::Puyo.score_pass(&report, 1), 40);
//! assert_eq!(ChainScoring::Square { multiplier: 5 }.score_pass(&report, 1), 80);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::resolve::{Cascade, PassReport};

const PUYO_CHAIN_POWER: [u64; 6] = [0, 8, 16, 32, 64, 96];
const PUYO_COLOR_BONUS: [u64; 5] = [0, 3, 6, 12, 24];
const PUYO_MAX_BONUS: u64 = 999;

/// How cleared cells turn into points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainScoring {
    /// Flat points per cleared cell.
    PerCell { points: u64 },

    /// `size² * multiplier` per group (PopStar uses 5).
    Square { multiplier: u64 },

    /// Puyo Puyo Tsu: `10 * cleared * (chain power + color bonus + group bonus)`.
    Puyo,
}

impl Default for ChainScoring {
    fn default() -> Self {
        ChainScoring::PerCell { points: 1 }
    }
}

impl ChainScoring {
    /// Points for one pass at chain position `chain`.
    #[must_use]
    pub fn score_pass(&self, report: &PassReport, chain: usize) -> u64 {
        match *self {
            ChainScoring::PerCell { points } => points.saturating_mul(report.cleared as u64),
            ChainScoring::Square { multiplier } => report
                .groups
                .iter()
                .map(|g| (g.size as u64).saturating_pow(2).saturating_mul(multiplier))
                .fold(0u64, u64::saturating_add),
            ChainScoring::Puyo => {
                let bonus = report
                    .groups
                    .iter()
                    .map(|g| group_bonus(g.size))
                    .fold(chain_power(chain) + color_bonus(report), u64::saturating_add);
                (report.cleared as u64)
                    .saturating_mul(10)
                    .saturating_mul(bonus.clamp(1, PUYO_MAX_BONUS))
            }
        }
    }

    /// Total points for a cascade, chaining passes in order.
    #[must_use]
    pub fn score_cascade(&self, cascade: &Cascade) -> u64 {
        cascade
            .passes
            .iter()
            .enumerate()
            .map(|(i, report)| self.score_pass(report, i + 1))
            .fold(0u64, u64::saturating_add)
    }
}

fn chain_power(chain: usize) -> u64 {
    let index = chain.saturating_sub(1);
    let power = match PUYO_CHAIN_POWER.get(index) {
        Some(&power) => power,
        None => {
            let extra = (index - (PUYO_CHAIN_POWER.len() - 1)) as u64;
            96u64.saturating_add(extra.saturating_mul(32))
        }
    };
    power.min(PUYO_MAX_BONUS)
}

fn color_bonus(report: &PassReport) -> u64 {
    let kinds: FxHashSet<_> = report.groups.iter().map(|g| g.tile.kind).collect();
    let index = kinds.len().saturating_sub(1).min(PUYO_COLOR_BONUS.len() - 1);
    PUYO_COLOR_BONUS[index]
}

fn group_bonus(size: usize) -> u64 {
    match size {
        0..=4 => 0,
        5..=10 => size as u64 - 3,
        _ => 10,
    }
}
