//! Spot × volatility grid sweeps.
//!
//! A sweep prices the same contract over every (vol, spot) pair of two axes
//! and returns the call and put surfaces together with the axes.
//!
//! # Seeding
//!
//! Cells are independent simulations. The cell at flat index
//! `vol_index * cols + spot_index` is seeded with
//! [`derive_seed`](crate::rng::derive_seed)`(base, index)`, so results do not
//! depend on evaluation order and [`sweep_parallel`] matches [`sweep`] bit
//! for bit.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::PricingParameters;
//! use pricer_pricing::mc::MonteCarloConfig;
//! use pricer_pricing::sweep::{sweep_parallel, GridSettings, SweepInputs};
//!
//! let base = PricingParameters::new(100.0, 100.0, 0.25, 0.07, 0.18, 2_000).unwrap();
//! let inputs = SweepInputs::around(&base, &GridSettings { points: 4, ..Default::default() });
//! let config = MonteCarloConfig::builder().n_paths(2_000).seed(1).build().unwrap();
//!
//! let surface = sweep_parallel(&inputs, &config).unwrap();
//! assert_eq!((surface.rows(), surface.cols()), (4, 4));
//! ```

mod axes;
mod engine;
mod error;
mod surface;

pub use axes::{linspace, GridSettings};
pub use engine::{sweep, sweep_parallel, SweepInputs};
pub use error::SweepError;
pub use surface::PriceSurface;
