//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Odd 64-bit stride (2^64 / golden ratio) used to spread derived seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed of the `index`-th independent stream from `base`.
///
/// Index 0 maps to `base` itself, so a single-cell computation seeded with
/// `base` reproduces a direct call seeded with `base`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::derive_seed;
///
/// assert_eq!(derive_seed(42, 0), 42);
/// assert_ne!(derive_seed(42, 1), derive_seed(42, 2));
/// ```
#[inline]
pub fn derive_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64).wrapping_mul(SEED_STRIDE))
}

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible random number generation for uniform and
/// normal distributions. Instances are cheap to create and are meant to be
/// scoped to a single pricing call.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
///
/// let n: f64 = rng.gen_normal();
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG from operating-system entropy.
    ///
    /// The drawn seed is retained and available through [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed(Self::entropy_seed())
    }

    /// Draws a fresh 64-bit seed from the thread-local entropy source.
    #[inline]
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }

    /// Creates a seeded RNG when `seed` is given, an entropy-seeded one otherwise.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let rng = PricerRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal (mean=0, std=1) variates.
    ///
    /// Produces the same sequence as repeated [`gen_normal`](Self::gen_normal)
    /// calls, so batching does not change results. Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
