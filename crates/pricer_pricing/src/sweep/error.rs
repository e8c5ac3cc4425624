//! Grid sweep errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised before a sweep starts simulating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A grid cell does not form valid pricing parameters.
    #[error("Invalid sweep cell (vol_index={vol_index}, spot_index={spot_index}): {source}")]
    InvalidCell {
        /// Row of the offending cell.
        vol_index: usize,
        /// Column of the offending cell.
        spot_index: usize,
        /// Underlying validation failure.
        #[source]
        source: PricingError,
    },
}
