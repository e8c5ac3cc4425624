//! Sweep command implementation
//!
//! Prices a spot × volatility grid around the given contract, or over
//! explicit axis bounds.

use pricer_core::types::PricingParameters;
use pricer_pricing::sweep::{linspace, sweep, sweep_parallel, PriceSurface, SweepInputs};
use tracing::info;

use super::price::ContractArgs;
use super::{emit, simulation_config, OutputFormat};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Absolute axis bounds; an unset pair falls back to the configured multipliers
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisBounds {
    pub spot_min: Option<f64>,
    pub spot_max: Option<f64>,
    pub vol_min: Option<f64>,
    pub vol_max: Option<f64>,
}

impl AxisBounds {
    fn spot(&self) -> Result<Option<(f64, f64)>> {
        bound_pair("spot", self.spot_min, self.spot_max)
    }

    fn vol(&self) -> Result<Option<(f64, f64)>> {
        bound_pair("vol", self.vol_min, self.vol_max)
    }
}

fn bound_pair(name: &str, min: Option<f64>, max: Option<f64>) -> Result<Option<(f64, f64)>> {
    match (min, max) {
        (None, None) => Ok(None),
        (Some(low), Some(high)) => {
            if !(low.is_finite() && high.is_finite()) || low > high {
                return Err(CliError::InvalidArgument(format!(
                    "--{name}-min {low} and --{name}-max {high} must be finite with min <= max"
                )));
            }
            Ok(Some((low, high)))
        }
        _ => Err(CliError::InvalidArgument(format!(
            "--{name}-min and --{name}-max must be given together"
        ))),
    }
}

/// Build the sweep inputs
///
/// Axes default to multipliers around the contract. A bound pair replaces
/// that axis with `points` evenly spaced values over `[min, max]`.
pub fn build_inputs(
    contract: &ContractArgs,
    bounds: &AxisBounds,
    config: &CliConfig,
) -> Result<SweepInputs> {
    let base = PricingParameters::new(
        contract.spot,
        contract.strike,
        contract.maturity,
        config.risk_free_rate,
        contract.volatility,
        config.simulations,
    )?;
    let mut inputs = SweepInputs::around(&base, &config.grid);

    if let Some((low, high)) = bounds.spot()? {
        inputs.spot_axis = linspace(low, high, config.grid.points);
    }
    if let Some((low, high)) = bounds.vol()? {
        inputs.vol_axis = linspace(low, high, config.grid.points);
    }
    Ok(inputs)
}

/// Build the price surface
pub fn execute(
    contract: &ContractArgs,
    bounds: &AxisBounds,
    config: &CliConfig,
) -> Result<PriceSurface> {
    let inputs = build_inputs(contract, bounds, config)?;
    let simulation = simulation_config(config)?;

    let surface = if config.parallel {
        sweep_parallel(&inputs, &simulation)?
    } else {
        sweep(&inputs, &simulation)?
    };
    Ok(surface)
}

/// Render both matrices, one row per volatility
pub fn render_table(surface: &PriceSurface) -> String {
    if surface.is_empty() {
        return format!("(empty surface, seed = {})", surface.seed);
    }

    let mut out = String::new();
    out.push_str(&render_matrix("Call", surface, &surface.call));
    out.push('\n');
    out.push_str(&render_matrix("Put", surface, &surface.put));
    out.push_str(&format!("seed = {}", surface.seed));
    out
}

fn render_matrix(title: &str, surface: &PriceSurface, values: &[Vec<f64>]) -> String {
    let mut out = format!("{} prices (rows: σ, columns: S)\n", title);

    out.push_str(&format!("{:>8} │", "σ \\ S"));
    for spot in &surface.spot_axis {
        out.push_str(&format!(" {:>10.2}", spot));
    }
    out.push('\n');
    out.push_str(&format!(
        "{}┼{}\n",
        "─".repeat(9),
        "─".repeat(11 * surface.cols())
    ));

    for (vol, row) in surface.vol_axis.iter().zip(values) {
        out.push_str(&format!("{:>7.2}% │", vol * 100.0));
        for value in row {
            out.push_str(&format!(" {:>10.4}", value));
        }
        out.push('\n');
    }
    out
}

/// Run the sweep command
pub fn run(
    contract: &ContractArgs,
    bounds: &AxisBounds,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting grid sweep...");
    info!("  Grid points per axis: {}", config.grid.points);
    info!("  Monte Carlo paths per cell: {}", config.simulations);
    info!("  Parallel: {}", config.parallel);

    let surface = execute(contract, bounds, config)?;
    emit(&surface, format, render_table)?;

    info!(
        "Sweep complete: {} × {} cells (seed {})",
        surface.rows(),
        surface.cols(),
        surface.seed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_pricing::mc::price;
    use pricer_pricing::sweep::GridSettings;

    fn config(points: usize, parallel: bool) -> CliConfig {
        CliConfig {
            simulations: 1_000,
            seed: Some(11),
            parallel,
            grid: GridSettings {
                points,
                ..GridSettings::default()
            },
            ..CliConfig::default()
        }
    }

    fn contract() -> ContractArgs {
        ContractArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 0.5,
            volatility: 0.3,
        }
    }

    #[test]
    fn test_surface_uses_grid_settings() {
        let surface = execute(&contract(), &AxisBounds::default(), &config(3, false)).unwrap();
        assert_eq!((surface.rows(), surface.cols()), (3, 3));
        assert_eq!(surface.spot_axis, vec![80.0, 100.0, 120.0]);
        assert!((surface.vol_axis[0] - 0.15).abs() < 1e-12);
        assert!((surface.vol_axis[2] - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_flag_gives_same_surface() {
        let sequential = execute(&contract(), &AxisBounds::default(), &config(4, false)).unwrap();
        let parallel = execute(&contract(), &AxisBounds::default(), &config(4, true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_zero_points_renders_empty() {
        let surface = execute(&contract(), &AxisBounds::default(), &config(0, false)).unwrap();
        assert!(surface.is_empty());
        assert!(render_table(&surface).starts_with("(empty surface"));
    }

    #[test]
    fn test_invalid_base_rejected() {
        let bad = ContractArgs {
            volatility: -0.2,
            ..contract()
        };
        assert!(matches!(
            execute(&bad, &AxisBounds::default(), &config(3, false)),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_table_has_one_line_per_volatility() {
        let surface = execute(&contract(), &AxisBounds::default(), &config(2, false)).unwrap();
        let table = render_table(&surface);
        assert!(table.contains("Call prices"));
        assert!(table.contains("Put prices"));
        // header + rule + 2 rows per matrix
        assert_eq!(table.matches("% │").count(), 4);
    }

    #[test]
    fn test_explicit_bounds_replace_axes() {
        let bounds = AxisBounds {
            spot_min: Some(50.0),
            spot_max: Some(150.0),
            vol_min: Some(0.1),
            vol_max: Some(0.5),
        };
        let surface = execute(&contract(), &bounds, &config(5, false)).unwrap();
        assert_eq!(surface.spot_axis, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
        assert_eq!(surface.vol_axis.len(), 5);
        assert!((surface.vol_axis[0] - 0.1).abs() < 1e-12);
        assert_eq!(surface.vol_axis[4], 0.5);
    }

    #[test]
    fn test_explicit_bounds_match_library_sweep() {
        let bounds = AxisBounds {
            spot_min: Some(90.0),
            spot_max: Some(110.0),
            vol_min: Some(0.2),
            vol_max: Some(0.2),
        };
        let cfg = config(3, false);
        let surface = execute(&contract(), &bounds, &cfg).unwrap();

        let inputs = SweepInputs::new(
            100.0,
            0.5,
            cfg.risk_free_rate,
            vec![90.0, 100.0, 110.0],
            vec![0.2, 0.2, 0.2],
        );
        let simulation = simulation_config(&cfg).unwrap();
        assert_eq!(surface, sweep(&inputs, &simulation).unwrap());

        // Cell (0, 0) reproduces a direct price call with the base seed
        let params = PricingParameters::new(90.0, 100.0, 0.5, cfg.risk_free_rate, 0.2, 1_000)
            .unwrap();
        assert_eq!(surface.call_at(0, 0), Some(price(&params, Some(11)).call_price));
    }

    #[test]
    fn test_single_bound_pair_keeps_other_axis() {
        let bounds = AxisBounds {
            vol_min: Some(0.05),
            vol_max: Some(0.25),
            ..AxisBounds::default()
        };
        let surface = execute(&contract(), &bounds, &config(3, false)).unwrap();
        assert_eq!(surface.spot_axis, vec![80.0, 100.0, 120.0]);
        assert!((surface.vol_axis[1] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_or_reversed_bounds_rejected() {
        let half = AxisBounds {
            spot_min: Some(80.0),
            ..AxisBounds::default()
        };
        assert!(matches!(
            execute(&contract(), &half, &config(3, false)),
            Err(CliError::InvalidArgument(_))
        ));

        let reversed = AxisBounds {
            vol_min: Some(0.5),
            vol_max: Some(0.1),
            ..AxisBounds::default()
        };
        assert!(matches!(
            execute(&contract(), &reversed, &config(3, false)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_positive_spot_bound_rejected_as_cell() {
        let bounds = AxisBounds {
            spot_min: Some(-10.0),
            spot_max: Some(10.0),
            ..AxisBounds::default()
        };
        assert!(matches!(
            execute(&contract(), &bounds, &config(3, false)),
            Err(CliError::Sweep(_))
        ));
    }
}
