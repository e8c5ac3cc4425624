//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report first and render it second, so the JSON and table
//! outputs always carry the same numbers.

use clap::ValueEnum;
use pricer_pricing::mc::MonteCarloConfig;
use serde::Serialize;

use crate::config::CliConfig;
use crate::Result;

pub mod calibrate;
pub mod price;
pub mod sweep;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Prints `report` as JSON, or as the table produced by `table`.
fn emit<T, F>(report: &T, format: OutputFormat, table: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => println!("{}", table(report)),
    }
    Ok(())
}

/// Engine settings from the resolved configuration.
fn simulation_config(config: &CliConfig) -> Result<MonteCarloConfig> {
    Ok(MonteCarloConfig::builder()
        .n_paths(config.simulations)
        .maybe_seed(config.seed)
        .build()?)
}
