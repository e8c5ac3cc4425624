//! Core time, pricing-input and error types.
//!
//! This module provides:
//! - `time`: Time types (Date, DayCountConvention) for year fraction calculations
//! - `params`: Validated scalar inputs of a pricing call
//! - `error`: Structured error types for pricing inputs and date handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`PricingError`], [`DateError`] from `error`
//! - [`PricingParameters`] from `params`

pub mod error;
pub mod params;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, PricingError};
pub use params::PricingParameters;
pub use time::{Date, DayCountConvention};
