//! Price command implementation
//!
//! Prices a European call and put with the pricer_pricing engine.

use pricer_core::types::PricingParameters;
use pricer_pricing::mc::{price, PriceResult};
use serde::Serialize;
use tracing::info;

use super::{emit, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Contract terms supplied on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractArgs {
    pub spot: f64,
    pub strike: f64,
    /// Years to maturity
    pub maturity: f64,
    /// Annualised volatility as a decimal
    pub volatility: f64,
}

/// Inputs echoed alongside the prices
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub parameters: PricingParameters,
    pub result: PriceResult,
}

/// Build the price report
pub fn execute(contract: &ContractArgs, config: &CliConfig) -> Result<PriceReport> {
    let parameters = PricingParameters::new(
        contract.spot,
        contract.strike,
        contract.maturity,
        config.risk_free_rate,
        contract.volatility,
        config.simulations,
    )?;
    let result = price(&parameters, config.seed);
    Ok(PriceReport { parameters, result })
}

/// Render the price report as a table
pub fn render_table(report: &PriceReport) -> String {
    let p = &report.parameters;
    let r = &report.result;
    let mut out = String::new();

    out.push_str(&format!(
        "S = {:.4}  K = {:.4}  T = {:.6}  r = {:.4}  σ = {:.4}  N = {}\n",
        p.spot(),
        p.strike(),
        p.maturity(),
        p.rate(),
        p.volatility(),
        p.n_paths()
    ));
    out.push_str("┌────────┬──────────────┬──────────────┬──────────────┐\n");
    out.push_str("│ Option │ Price        │ Std Error    │ 95% CI ±     │\n");
    out.push_str("├────────┼──────────────┼──────────────┼──────────────┤\n");
    out.push_str(&format!(
        "│ Call   │ {:>12.4} │ {:>12.4} │ {:>12.4} │\n",
        r.call_price,
        r.call_std_error,
        r.call_confidence_95()
    ));
    out.push_str(&format!(
        "│ Put    │ {:>12.4} │ {:>12.4} │ {:>12.4} │\n",
        r.put_price,
        r.put_std_error,
        r.put_confidence_95()
    ));
    out.push_str("└────────┴──────────────┴──────────────┴──────────────┘\n");
    out.push_str(&format!("seed = {}", r.seed));
    out
}

/// Run the price command
pub fn run(contract: &ContractArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Starting pricing...");
    info!("  Monte Carlo paths: {}", config.simulations);
    info!("  Risk-free rate: {}", config.risk_free_rate);

    let report = execute(contract, config)?;
    emit(&report, format, render_table)?;

    info!("Pricing complete (seed {})", report.result.seed);
    Ok(())
}
