//! Seeded random number generator for reproducible trials

use rand::{Rng as RandRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG wrapper. Each trial owns a stream derived from the master
/// seed, so a rerun with the same seed replays every trial exactly.
pub struct Rng {
    inner: ChaCha8Rng,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.inner.gen()
    }

    pub fn range_usize(&mut self, min: usize, max: usize) -> usize {
        self.inner.gen_range(min..max)
    }

    /// Uniformly chosen element, or `None` on an empty slice.
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            None
        } else {
            Some(&slice[self.range_usize(0, slice.len())])
        }
    }

    /// One of the four axis-aligned unit steps.
    pub fn step(&mut self) -> (i32, i32) {
        const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        STEPS[self.range_usize(0, 4)]
    }
}
