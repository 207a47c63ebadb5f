//! Deterministic random number generation.
//!
//! Uses a seeded PRNG (Xoshiro256**) so identical seeds draw identical
//! term counts.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Deterministic random number generator.
///
/// # Example
///
/// ```rust
/// use seq_testkit::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let (n, m) = rng.prefix_pair(100);
/// assert!(n <= m && m <= 100);
///
/// let mut replay = DeterministicRng::new(12345);
/// assert_eq!(replay.prefix_pair(100), (n, m));
/// ```
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero for better randomness");

        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    /// Generate a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.calls_count += 1;
        self.rng.gen_range(range)
    }

    /// A term count in `0..=max`.
    pub fn term_count(&mut self, max: usize) -> usize {
        self.gen_range(0..=max)
    }

    /// Two term counts `n <= m <= max`, for prefix comparisons.
    pub fn prefix_pair(&mut self, max: usize) -> (usize, usize) {
        let a = self.term_count(max);
        let b = self.term_count(max);
        (a.min(b), a.max(b))
    }

    /// Reset to initial state (same seed).
    pub fn reset(&mut self) {
        self.rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        self.calls_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.term_count(1000), rng2.term_count(1000));
        }
    }

    #[test]
    fn test_prefix_pair_ordered() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..100 {
            let (n, m) = rng.prefix_pair(50);
            assert!(n <= m);
            assert!(m <= 50);
        }
        assert_eq!(rng.calls_count(), 200);
    }

    #[test]
    fn test_reset() {
        let mut rng = DeterministicRng::new(12345);
        let first = rng.term_count(1_000_000);
        for _ in 0..10 {
            rng.term_count(1_000_000);
        }

        rng.reset();
        assert_eq!(rng.calls_count(), 0);
        assert_eq!(rng.term_count(1_000_000), first);
    }
}
