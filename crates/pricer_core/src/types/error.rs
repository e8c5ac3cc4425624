//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing input validation
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Raised when a pricing call receives inputs outside the model's domain.
/// The engine never substitutes a default for a rejected input.
///
/// # Variants
/// - `InvalidParameter`: A scalar input violates its admissible range
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "spot",
///     value: -1.0,
///     reason: "must be strictly positive",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'spot' = -1: must be strictly positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A scalar pricing input is outside its admissible range.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl PricingError {
    /// Shorthand for a parameter that must be strictly positive and finite.
    pub fn not_positive(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be strictly positive and finite",
        }
    }

    /// Shorthand for a parameter that must be non-negative and finite.
    pub fn negative(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative and finite",
        }
    }

    /// Shorthand for a parameter that must be finite.
    pub fn not_finite(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        }
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
