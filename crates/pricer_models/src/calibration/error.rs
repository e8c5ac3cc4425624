//! Calibration error types.
//!
//! Every variant is terminal for the calibration attempt: no partial or
//! approximate quote is produced alongside an error.

use pricer_core::types::Date;
use thiserror::Error;

/// Calibration error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// The snapshot lists no expiry dates.
    #[error("Market snapshot contains no expiries")]
    NoExpiriesAvailable,

    /// The selected expiry has no strikes quoted against it.
    #[error("No strikes quoted for expiry {expiry}")]
    NoStrikesForExpiry {
        /// Selected expiry
        expiry: Date,
    },

    /// The at-the-money quote has no call-side implied volatility.
    #[error("Missing call implied volatility for strike {strike} expiring {expiry}")]
    MissingImpliedVolatility {
        /// At-the-money strike
        strike: f64,
        /// Selected expiry
        expiry: Date,
    },

    /// The selected expiry is not strictly after the valuation date.
    #[error("Expiry {expiry} is not after valuation date {valuation_date}")]
    InvalidExpiry {
        /// Selected expiry
        expiry: Date,
        /// Date the snapshot was calibrated against
        valuation_date: Date,
    },

    /// Snapshot values outside their admissible range.
    #[error("Invalid market data: {message}")]
    InvalidMarketData {
        /// Description of the validation failure
        message: String,
    },
}

impl CalibrationError {
    /// Create an invalid market data error.
    pub fn invalid_market_data(message: impl Into<String>) -> Self {
        CalibrationError::InvalidMarketData {
            message: message.into(),
        }
    }
}
