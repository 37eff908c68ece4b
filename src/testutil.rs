use rand::{RngExt, SeedableRng, rngs::StdRng};

use crate::IntSet;

pub fn mkset(values: impl IntoIterator<Item = i64>) -> IntSet {
    values.into_iter().collect()
}

/// Seeded generator of sparse signed-integer samples.
pub struct SetGen {
    rng: StdRng,
}

impl SetGen {
    pub fn new(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Self { rng }
    }

    /// Draws `len` values uniformly from `lo..=hi`; duplicates allowed,
    /// canonicalization is the collecting set's job.
    pub fn sparse(&mut self, lo: i64, hi: i64, len: usize) -> Vec<i64> {
        (0..len).map(|_| self.rng.random_range(lo..=hi)).collect()
    }
}
