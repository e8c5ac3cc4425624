//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the numerical kernel of the workspace:
//! - Standard-normal sampling with explicit, locally scoped generators ([`rng`])
//! - European call/put pricing by plain Monte Carlo under GBM ([`mc`])
//! - Spot × volatility sensitivity surfaces ([`sweep`])
//!
//! ## Model
//!
//! Terminal prices are drawn from the exact GBM solution under the
//! risk-neutral measure, so a single step reaches maturity:
//!
//! ```text
//! S_T = S · exp((r − ½σ²)T + σ√T · Z),   Z ~ N(0, 1)
//! ```
//!
//! ## Reproducibility
//!
//! No global generator exists. Every pricing call owns its [`rng::PricerRng`],
//! created from an explicit seed or from fresh entropy; the seed used is
//! returned with the result.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::PricingParameters;
//! use pricer_pricing::mc::price;
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 50_000).unwrap();
//! let result = price(&params, Some(42));
//!
//! // Put-call parity: C - P ≈ S - K·exp(-rT)
//! let forward_value = 100.0 - 100.0 * (-0.05_f64).exp();
//! assert!((result.call_price - result.put_price - forward_value).abs() < 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
pub mod sweep;

// Re-export commonly used items for convenience
pub use mc::{price, price_with_rng, MonteCarloConfig, PriceResult};
pub use sweep::{sweep, sweep_parallel, GridSettings, PriceSurface, SweepError, SweepInputs};
