//! Deterministic random number generation for the sampling loop.
//!
//! Simulation results must be reproducible from a seed, so the core carries
//! its own generator instead of pulling entropy from the OS. Callers that
//! want non-deterministic runs seed it from whatever entropy source they
//! like.

/// A fast, deterministic pseudo-random number generator.
///
/// Linear Congruential Generator with parameters from Numerical Recipes:
/// statistically adequate for Monte Carlo area estimation and trivially
/// reproducible.
///
/// # Example
/// ```
/// use microlens::rng::Rng;
///
/// let mut rng = Rng::new(12345);
/// let value = rng.next_f64(); // Returns value in [0, 1)
/// ```
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    ///
    /// The same seed will always produce the same sequence of numbers.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Get the next raw u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Get a random f64 in the range [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // Use high bits for better distribution
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Get a random f64 in the range [min, max).
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
