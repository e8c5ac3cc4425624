//! Neutryx MC - Command Line Monte Carlo Option Pricer
//!
//! This is the operational entry point for the Neutryx European option pricer.
//!
//! # Commands
//!
//! - `neutryx-mc price` - Price a European call and put
//! - `neutryx-mc sweep` - Price a spot × volatility grid around a contract or
//!   over `--spot-min/--spot-max/--vol-min/--vol-max`
//! - `neutryx-mc calibrate --snapshot <file>` - Derive inputs from an option chain
//!
//! # Configuration
//!
//! Settings resolve in order CLI flags, `PRICER_*` environment variables,
//! the TOML file (`--config`, default `neutryx-mc.toml`), then defaults.
//! `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::calibrate::CalibrateArgs;
use commands::price::ContractArgs;
use commands::sweep::AxisBounds;
use commands::OutputFormat;
use config::{build_config, CliArgs, CliConfig};

/// Neutryx Monte Carlo European Option Pricer CLI
#[derive(Parser)]
#[command(name = "neutryx-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to neutryx-mc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Risk-free rate override
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Monte Carlo simulations per pricing call
    #[arg(short = 'n', long, global = true)]
    simulations: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct Contract {
    /// Spot price of the underlying
    #[arg(long)]
    spot: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    strike: f64,

    /// Time to maturity in years
    #[arg(short, long)]
    maturity: f64,

    /// Annualised volatility as a decimal (0.2 = 20%)
    #[arg(long)]
    volatility: f64,
}

impl From<Contract> for ContractArgs {
    fn from(c: Contract) -> Self {
        ContractArgs {
            spot: c.spot,
            strike: c.strike,
            maturity: c.maturity,
            volatility: c.volatility,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
struct Bounds {
    /// Lowest spot on the grid (requires --spot-max)
    #[arg(long, requires = "spot_max")]
    spot_min: Option<f64>,

    /// Highest spot on the grid (requires --spot-min)
    #[arg(long, requires = "spot_min")]
    spot_max: Option<f64>,

    /// Lowest volatility on the grid, decimal (requires --vol-max)
    #[arg(long, requires = "vol_max")]
    vol_min: Option<f64>,

    /// Highest volatility on the grid, decimal (requires --vol-min)
    #[arg(long, requires = "vol_min")]
    vol_max: Option<f64>,
}

impl From<Bounds> for AxisBounds {
    fn from(b: Bounds) -> Self {
        AxisBounds {
            spot_min: b.spot_min,
            spot_max: b.spot_max,
            vol_min: b.vol_min,
            vol_max: b.vol_max,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put
    Price {
        #[command(flatten)]
        contract: Contract,
    },

    /// Price call and put surfaces over a spot × volatility grid
    Sweep {
        #[command(flatten)]
        contract: Contract,

        #[command(flatten)]
        bounds: Bounds,

        /// Points per grid axis
        #[arg(short = 'p', long)]
        grid_points: Option<usize>,

        /// Run grid cells on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Calibrate pricing inputs from an option-chain snapshot
    Calibrate {
        /// Path to snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Valuation date (YYYY-MM-DD or DD-Mon-YYYY); today if omitted
        #[arg(short = 'd', long)]
        valuation_date: Option<String>,

        /// Day count convention (ACT/365, ACT/360)
        #[arg(long)]
        day_count: Option<String>,

        /// Also price the calibrated ATM call and put
        #[arg(long)]
        price: bool,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (grid_points, parallel) = match &self.command {
            Commands::Sweep {
                grid_points,
                parallel,
                ..
            } => (*grid_points, *parallel),
            _ => (None, false),
        };
        CliArgs {
            config_file: self.config.clone(),
            rate: self.rate,
            simulations: self.simulations,
            seed: self.seed,
            grid_points,
            parallel,
            verbose: self.verbose,
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Price { contract } => commands::price::run(&contract.into(), &config, cli.format),
        Commands::Sweep {
            contract, bounds, ..
        } => commands::sweep::run(&contract.into(), &bounds.into(), &config, cli.format),
        Commands::Calibrate {
            snapshot,
            valuation_date,
            day_count,
            price,
        } => {
            let args = CalibrateArgs {
                valuation_date,
                day_count,
                price,
            };
            commands::calibrate::run(&snapshot, &args, &config, cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sweep_flags_reach_config_args() {
        let cli = Cli::parse_from([
            "neutryx-mc",
            "--seed",
            "3",
            "sweep",
            "--spot",
            "100",
            "--strike",
            "100",
            "--maturity",
            "0.5",
            "--volatility",
            "0.2",
            "--grid-points",
            "4",
            "--parallel",
        ]);
        let args = cli.config_args();
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.grid_points, Some(4));
        assert!(args.parallel);
    }

    #[test]
    fn test_sweep_bounds_parse_into_axis_bounds() {
        let cli = Cli::parse_from([
            "neutryx-mc",
            "sweep",
            "--spot",
            "100",
            "--strike",
            "100",
            "--maturity",
            "0.5",
            "--volatility",
            "0.2",
            "--spot-min",
            "60",
            "--spot-max",
            "140",
            "--vol-min",
            "0.1",
            "--vol-max",
            "0.6",
        ]);
        let Commands::Sweep { bounds, .. } = cli.command else {
            panic!("expected sweep command");
        };
        assert_eq!(
            AxisBounds::from(bounds),
            AxisBounds {
                spot_min: Some(60.0),
                spot_max: Some(140.0),
                vol_min: Some(0.1),
                vol_max: Some(0.6),
            }
        );
    }

    #[test]
    fn test_sweep_bound_without_partner_rejected() {
        let result = Cli::try_parse_from([
            "neutryx-mc",
            "sweep",
            "--spot",
            "100",
            "--strike",
            "100",
            "--maturity",
            "0.5",
            "--volatility",
            "0.2",
            "--spot-min",
            "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_rate_and_json_format() {
        let cli = Cli::parse_from([
            "neutryx-mc",
            "price",
            "--spot",
            "100",
            "--strike",
            "95",
            "--maturity",
            "1",
            "--volatility",
            "0.25",
            "--rate",
            "-0.01",
            "--format",
            "json",
        ]);
        assert_eq!(cli.rate, Some(-0.01));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Price { .. }));
    }
}
