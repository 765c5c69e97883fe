//! Seeded RNG wrapper.
//!
//! Spatial index construction may shuffle its input to avoid degenerate tree
//! shapes on pre-sorted data.  The shuffle must be reproducible across runs,
//! so it is always driven by an explicitly seeded `SmallRng` rather than
//! thread-local entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for build-time randomisation.
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
