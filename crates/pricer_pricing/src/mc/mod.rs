//! Monte Carlo pricing kernel for vanilla European options.
//!
//! This module provides the simulation infrastructure for pricing European
//! calls and puts under Geometric Brownian Motion.
//!
//! # Architecture
//!
//! ```text
//! price(params, seed)
//! ├── PricerRng          (locally scoped, explicit seed)
//! ├── GbmTerminal        (exact discounted terminal-price map, K·exp(-rT))
//! └── call/put payoffs   (PayoffAccumulator: mean + standard error) → PriceResult
//! ```
//!
//! No variance reduction is applied: the standard error shrinks as
//! `O(1/√N)` and callers needing tighter estimates raise `n_paths`.
//!
//! # Examples
//!
//! ## Seeded European Pricing
//!
//! ```rust
//! use pricer_core::types::PricingParameters;
//! use pricer_pricing::mc::price;
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 100_000).unwrap();
//! let result = price(&params, Some(42));
//!
//! println!(
//!     "Call: {:.4} +/- {:.4}, Put: {:.4} +/- {:.4}",
//!     result.call_price,
//!     result.call_confidence_95(),
//!     result.put_price,
//!     result.put_confidence_95(),
//! );
//! ```
//!
//! ## Caller-Owned Generator
//!
//! ```rust
//! use pricer_core::types::PricingParameters;
//! use pricer_pricing::mc::price_with_rng;
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = PricingParameters::new(100.0, 105.0, 0.5, 0.05, 0.2, 10_000).unwrap();
//! let mut rng = PricerRng::from_seed(7);
//!
//! // Successive calls continue the same stream
//! let first = price_with_rng(&params, &mut rng);
//! let second = price_with_rng(&params, &mut rng);
//! assert_ne!(first.call_price, second.call_price);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::ConfigError;
pub use paths::GbmTerminal;
pub use payoff::{call_payoff, put_payoff, PayoffAccumulator};
pub use pricer::{price, price_with_rng, PriceResult};
