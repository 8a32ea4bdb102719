//! Platform random source for unseeded generators.
//!
//! Uses the `rand` crate with `SmallRng` (xoshiro256++) which is fast and
//! works with WASM. Entropy is sourced from `getrandom` (browser crypto API).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform unit-interval source backing unseeded mode.
#[derive(Debug, Clone)]
pub struct Entropy {
    inner: SmallRng,
}

impl Entropy {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a fixed seed. Only meant for tests that need a stable
    /// platform stream; unseeded generators always use [`Entropy::new`].
    #[allow(dead_code)]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate an f64 in [0, 1).
    #[inline(always)]
    pub fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deterministic() {
        let mut a = Entropy::from_seed(42);
        let mut b = Entropy::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_unit_bounds() {
        let mut e = Entropy::new();
        for _ in 0..10_000 {
            let v = e.next_unit();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }
}
