//! Injectable random number generation for dealing hands.
//!
//! ## Key Features
//!
//! - **Injectable**: the Hand Selector takes any `RandomSource`, so tests can
//!   script the exact draws.
//! - **Deterministic on request**: `GameRng::new(seed)` replays the same deal.
//! - **Entropy-seeded by default**: `GameRng::from_entropy()` for real games.
//!
//! ```
//! use als_board::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..18), b.gen_range_usize(0..18));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Pick an index uniformly from `0..upper`. `upper` is never zero.
    fn pick_index(&mut self, upper: usize) -> usize;
}

/// ChaCha8-backed RNG used for dealing.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    ///
    /// The chosen seed is kept so a surprising deal can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        Self::new(seed)
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}
