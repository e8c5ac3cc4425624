//! # Random Number Generation
//!
//! Pseudo-random number generation for Monte Carlo simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Generators are created from an explicit 64-bit seed
//! - **Locality**: Each pricing call owns its generator; nothing is shared
//!   between calls or threads
//! - **Traceability**: Entropy-seeded generators still record the seed they
//!   were built from, so any run can be replayed
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::{derive_seed, PricerRng};
