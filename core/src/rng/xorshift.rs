//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG that is deterministic and suitable for repeated
//! matching trials.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Reproducing a hard instance that took many trials to solve
//! - Testing (verify behavior)
//! - Comparing matching strategies on identical instances

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use affiliate_matching_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let index = rng.index(10); // [0, 10)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use affiliate_matching_core::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Seed must never be zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random index in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n` is zero
    pub fn index(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be positive");
        (self.next() % n as u64) as usize
    }

    /// Shuffle a slice in place (Fisher-Yates)
    ///
    /// # Example
    /// ```
    /// use affiliate_matching_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let mut xs = vec![0, 1, 2, 3];
    /// rng.shuffle(&mut xs);
    /// assert_eq!(xs.len(), 4);
    /// ```
    pub fn shuffle<T>(&mut self, xs: &mut [T]) {
        for i in (1..xs.len()).rev() {
            let j = self.index(i + 1);
            xs.swap(i, j);
        }
    }

    /// Draw a uniform random permutation of `0..n`
    ///
    /// # Example
    /// ```
    /// use affiliate_matching_core::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let mut perm = rng.permutation(5);
    /// perm.sort();
    /// assert_eq!(perm, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        self.shuffle(&mut perm);
        perm
    }

    /// Get current RNG state (for reproducing a run mid-stream)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
