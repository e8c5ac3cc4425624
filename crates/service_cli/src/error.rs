//! CLI error types

use pricer_core::types::{DateError, PricingError};
use pricer_models::calibration::CalibrationError;
use pricer_pricing::mc::ConfigError as SimulationError;
use pricer_pricing::sweep::SweepError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation settings error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] SweepError),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
