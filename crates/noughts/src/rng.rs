//! Deterministic random number source for the computer opponent.
//!
//! The RNG is injected into move selection so that computer play is
//! reproducible: the same seed always produces the same game.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for the computer's random move selection.
#[derive(Debug, Clone)]
pub struct MoveRng {
    inner: ChaCha8Rng,
}

impl MoveRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from system entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` if the slice is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
