//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and CLI arguments.

use pricer_pricing::mc::MAX_PATHS;
use pricer_pricing::sweep::GridSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "neutryx-mc.toml";

/// Largest accepted grid axis length.
pub const MAX_GRID_POINTS: usize = 1_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid risk-free rate: {0}. Must be finite")]
    InvalidRate(f64),

    #[error("Invalid simulation count: {0}. Must be between 1 and 10,000,000")]
    InvalidSimulations(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid grid settings: {0}")]
    InvalidGrid(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Pricer configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Annualised continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Monte Carlo simulations per pricing call
    pub simulations: usize,
    /// Fixed seed; fresh entropy per run when absent
    pub seed: Option<u64>,
    /// Log level used when RUST_LOG is unset
    pub log_level: LogLevel,
    /// Run sweeps on the rayon thread pool
    pub parallel: bool,
    /// Sweep axis construction
    pub grid: GridSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.07,
            simulations: 100_000,
            seed: None,
            log_level: LogLevel::Info,
            parallel: false,
            grid: GridSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `PRICER_*` variables returned by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("PRICER_RISK_FREE_RATE") {
            self.risk_free_rate = parse_env("PRICER_RISK_FREE_RATE", &rate)?;
        }
        if let Some(simulations) = lookup("PRICER_SIMULATIONS") {
            self.simulations = parse_env("PRICER_SIMULATIONS", &simulations)?;
        }
        if let Some(seed) = lookup("PRICER_SEED") {
            self.seed = Some(parse_env("PRICER_SEED", &seed)?);
        }
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(points) = lookup("PRICER_GRID_POINTS") {
            self.grid.points = parse_env("PRICER_GRID_POINTS", &points)?;
        }
        if let Some(parallel) = lookup("PRICER_PARALLEL") {
            self.parallel = parallel.to_lowercase() == "true";
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidRate(self.risk_free_rate));
        }
        if self.simulations == 0 || self.simulations > MAX_PATHS {
            return Err(ConfigError::InvalidSimulations(self.simulations));
        }
        validate_grid(&self.grid)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(rate) = cli.rate {
            self.risk_free_rate = rate;
        }
        if let Some(simulations) = cli.simulations {
            self.simulations = simulations;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(points) = cli.grid_points {
            self.grid.points = points;
        }
        if cli.parallel {
            self.parallel = true;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}='{}' could not be parsed", key, value)))
}

fn validate_grid(grid: &GridSettings) -> Result<(), ConfigError> {
    if grid.points > MAX_GRID_POINTS {
        return Err(ConfigError::InvalidGrid(format!(
            "points = {} exceeds {}",
            grid.points, MAX_GRID_POINTS
        )));
    }
    let multipliers = [
        ("spot_low", grid.spot_low),
        ("spot_high", grid.spot_high),
        ("vol_low", grid.vol_low),
        ("vol_high", grid.vol_high),
    ];
    for (name, value) in multipliers {
        if !(value > 0.0 && value.is_finite()) {
            return Err(ConfigError::InvalidGrid(format!(
                "{} = {} must be positive and finite",
                name, value
            )));
        }
    }
    if grid.spot_low > grid.spot_high || grid.vol_low > grid.vol_high {
        return Err(ConfigError::InvalidGrid(
            "lower multipliers must not exceed upper multipliers".to_string(),
        ));
    }
    if !(grid.spot_floor > 0.0 && grid.spot_floor.is_finite()) {
        return Err(ConfigError::InvalidGrid(format!(
            "spot_floor = {} must be positive",
            grid.spot_floor
        )));
    }
    if !(grid.vol_floor >= 0.0 && grid.vol_floor <= grid.vol_cap && grid.vol_cap.is_finite()) {
        return Err(ConfigError::InvalidGrid(format!(
            "volatility bounds [{}, {}] are not an admissible range",
            grid.vol_floor, grid.vol_cap
        )));
    }
    Ok(())
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Risk-free rate override
    pub rate: Option<f64>,
    /// Simulation count override
    pub simulations: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Grid points override
    pub grid_points: Option<usize>,
    /// Force parallel sweeps
    pub parallel: bool,
    /// Raise log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
///
/// An explicit `--config` path must exist; the default file is optional.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
