//! Random number generation for map runs.
//!
//! Uses a seeded ChaCha RNG for reproducibility: the same seed and
//! parameters always produce the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generation random number generator
///
/// Wraps ChaCha8Rng and remembers its seed, so an interesting or
/// failing run can be reported and replayed.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in 0..n
    ///
    /// Returns 0 if n is not positive.
    pub fn upto(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in lo..=hi
    ///
    /// Returns lo if the range is empty.
    pub fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upto_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.upto(10);
            assert!((0..10).contains(&n));
        }
    }

    #[test]
    fn test_between_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.between(2, 6);
            assert!((2..=6).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = MapRng::new(42);
        let mut rng2 = MapRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.upto(100), rng2.upto(100));
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut rng = MapRng::new(42);
        assert_eq!(rng.upto(0), 0);
        assert_eq!(rng.upto(-3), 0);
        assert_eq!(rng.between(5, 5), 5);
        assert_eq!(rng.between(5, 2), 5);
    }

    #[test]
    fn test_seed_is_retained() {
        let rng = MapRng::new(7);
        assert_eq!(rng.seed(), 7);
    }
}
