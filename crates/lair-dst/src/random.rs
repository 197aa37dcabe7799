//! Deterministic random number generation.
//!
//! Uses a seeded Xoshiro256** so identical seeds give identical walks.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seeded RNG that counts its calls.
///
/// ```rust
/// use lair_dst::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let a: u64 = rng.gen();
///
/// let mut rng2 = DeterministicRng::new(12345);
/// assert_eq!(rng2.gen::<u64>(), a);
/// ```
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

/// Number of RNG calls past which a walk is assumed to be runaway.
const RNG_CALLS_WARNING_THRESHOLD: u64 = 1_000_000_000;

impl DeterministicRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero");

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

    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    fn count_call(&mut self) {
        self.calls_count += 1;
        debug_assert!(
            self.calls_count < RNG_CALLS_WARNING_THRESHOLD,
            "Very high number of RNG calls - possible infinite loop"
        );
    }

    pub fn gen<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.count_call();
        self.rng.gen()
    }

    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.count_call();
        self.rng.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.count_call();
        self.rng.gen_bool(probability)
    }

    /// Pick one element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.count_call();
        slice.choose(&mut self.rng)
    }

    /// Derive an independent RNG, e.g. one per walk in a batch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        // Keep the forked seed non-zero.
        let seed = self.gen::<u64>().max(1);
        Self::new(seed)
    }

    /// Restart the sequence from the original seed.
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
            assert_eq!(rng1.gen_range(0..3u32), rng2.gen_range(0..3u32));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = DeterministicRng::new(12345);
        let piles = ["Forest", "Base", "Hideout"];

        for _ in 0..50 {
            assert!(piles.contains(rng.choose(&piles).unwrap()));
        }
        assert!(rng.choose::<u32>(&[]).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = DeterministicRng::new(12345);
        assert!((0..10).all(|_| !rng.gen_bool(0.0)));
        assert!((0..10).all(|_| rng.gen_bool(1.0)));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(12345);
        assert_eq!(rng.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_reset_and_calls_count() {
        let mut rng = DeterministicRng::new(12345);
        let first: u64 = rng.gen();
        let _ = rng.gen_range(0..10);
        assert_eq!(rng.calls_count(), 2);

        rng.reset();
        assert_eq!(rng.calls_count(), 0);
        assert_eq!(rng.gen::<u64>(), first);
    }
}
