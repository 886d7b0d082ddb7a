//! Deterministic random number generation for seeding and refilling grids.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Forkable**: Independent streams, e.g. one per player board
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! ```
//! use match_cascade::core::GridRng;
//!
//! let mut rng = GridRng::new(42);
//! let mut other = GridRng::new(42);
//! assert_eq!(rng.gen_kind(5), other.gen_kind(5));
//!
//! // Forks are deterministic too
//! let mut fork_a = rng.fork();
//! let mut fork_b = other.fork();
//! assert_eq!(fork_a.gen_kind(5), fork_b.gen_kind(5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GridRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GridRng {
    /// Stream for a board or refill seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive a child stream, e.g. for a second player's refill.
    ///
    /// The child depends only on the seed and how many forks came before it,
    /// not on how many draws the parent has made.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform kind in `0..kind_count`.
    pub fn gen_kind(&mut self, kind_count: u8) -> u8 {
        assert!(kind_count > 0, "Need at least one kind");
        self.inner.gen_range(0..kind_count)
    }

    /// Uniform index, used for picking cells.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with probability `probability` (refill upgrade rolls).
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Permute cells or kinds in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick one element, `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Snapshot for replays and saved sessions.
    #[must_use]
    pub fn state(&self) -> GridRngState {
        GridRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume exactly where [`GridRng::state`] left off.
    #[must_use]
    pub fn from_state(state: &GridRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Saved position of a [`GridRng`] stream.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many values were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub fork_counter: u64,
}
