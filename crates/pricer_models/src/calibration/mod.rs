//! Market snapshot calibration.
//!
//! This module derives the scalar pricing inputs from an option chain:
//! - [`MarketSnapshot`] / [`OptionQuote`]: Read-only option-chain data
//! - [`select_atm_strike`]: Nearest-to-spot strike with an explicit tie rule
//! - [`calibrate`]: Snapshot → [`CalibratedQuote`] (expiry, ATM strike, sigma, T)
//! - [`CalibrationError`]: Terminal calibration failures
//!
//! # Architecture
//!
//! ```text
//! MarketSnapshot ──► nearest expiry ──► ATM strike ──► call IV / 100 ──► CalibratedQuote
//!                                                                          │
//!                                  rate, n_paths ──► to_pricing_parameters ┘
//! ```
//!
//! The risk-free rate is configuration supplied by the caller, never read
//! from the snapshot.

mod atm;
mod error;
mod quote;
mod snapshot;

pub use atm::{select_atm_strike, AtmSelection};
pub use error::CalibrationError;
pub use quote::{calibrate, calibrate_today, calibrate_with_convention, CalibratedQuote};
pub use snapshot::{MarketSnapshot, OptionQuote};
