//! Calibrate command implementation
//!
//! Derives pricing inputs from a market snapshot using pricer_models, then
//! optionally prices the ATM call and put.

use std::path::Path;

use pricer_core::types::{Date, DayCountConvention};
use pricer_models::calibration::{calibrate_with_convention, CalibratedQuote, MarketSnapshot};
use pricer_pricing::mc::{price, PriceResult};
use serde::Serialize;
use tracing::info;

use super::{emit, OutputFormat};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Calibration settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CalibrateArgs {
    /// Valuation date; today when absent
    pub valuation_date: Option<String>,
    /// Day count convention name
    pub day_count: Option<String>,
    /// Also price the calibrated contract
    pub price: bool,
}

/// Calibration outcome with optional pricing
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub valuation_date: Date,
    pub day_count: DayCountConvention,
    pub quote: CalibratedQuote,
    pub risk_free_rate: f64,
    pub pricing: Option<PriceResult>,
}

/// Load a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<MarketSnapshot> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Build the calibration report
pub fn execute(
    snapshot: &MarketSnapshot,
    args: &CalibrateArgs,
    config: &CliConfig,
) -> Result<CalibrationReport> {
    let valuation_date = match &args.valuation_date {
        Some(date) => Date::parse(date)?,
        None => Date::today(),
    };
    let day_count = match &args.day_count {
        Some(name) => name
            .parse::<DayCountConvention>()
            .map_err(CliError::InvalidArgument)?,
        None => DayCountConvention::default(),
    };

    let quote = calibrate_with_convention(snapshot, valuation_date, day_count)?;
    info!(
        "  Nearest expiry {} / ATM strike {} / σ = {:.2}%",
        quote.expiry.to_exchange_string(),
        quote.atm_strike,
        quote.sigma_percent()
    );

    let pricing = if args.price {
        let parameters = quote.to_pricing_parameters(config.risk_free_rate, config.simulations)?;
        Some(price(&parameters, config.seed))
    } else {
        None
    };

    Ok(CalibrationReport {
        valuation_date,
        day_count,
        quote,
        risk_free_rate: config.risk_free_rate,
        pricing,
    })
}

/// Render the calibration report as text
pub fn render_table(report: &CalibrationReport) -> String {
    let q = &report.quote;
    let mut out = String::new();

    out.push_str(&format!(
        "Valuation date : {} ({})\n",
        report.valuation_date.to_exchange_string(),
        report.day_count
    ));
    out.push_str(&format!("Spot           : {:.2}\n", q.spot));
    out.push_str(&format!("Expiry         : {}\n", q.expiry.to_exchange_string()));
    out.push_str(&format!(
        "ATM strike     : {:.2}{}\n",
        q.atm_strike,
        if q.approximate { " (tie, lower strike)" } else { "" }
    ));
    out.push_str(&format!("Implied vol    : {:.2}%\n", q.sigma_percent()));
    out.push_str(&format!("T (years)      : {:.6}\n", q.time_to_maturity));
    out.push_str(&format!("Risk-free rate : {:.4}", report.risk_free_rate));

    if let Some(result) = &report.pricing {
        out.push_str(&format!(
            "\nCall           : {:.4} ± {:.4}\n",
            result.call_price,
            result.call_confidence_95()
        ));
        out.push_str(&format!(
            "Put            : {:.4} ± {:.4}\n",
            result.put_price,
            result.put_confidence_95()
        ));
        out.push_str(&format!("Seed           : {}", result.seed));
    }
    out
}

/// Run the calibrate command
pub fn run(
    snapshot_path: &Path,
    args: &CalibrateArgs,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting calibration...");
    info!("  Snapshot: {}", snapshot_path.display());

    let snapshot = load_snapshot(snapshot_path)?;
    let report = execute(&snapshot, args, config)?;
    emit(&report, format, render_table)?;

    info!("Calibration complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::calibration::CalibrationError;

    const SNAPSHOT: &str = r#"{
        "spot": 24150.0,
        "expiries": ["28-Nov-2024", "26-Dec-2024"],
        "quotes": [
            { "expiry": "2024-11-28", "strike": 24100.0, "call_implied_volatility": 13.8 },
            { "expiry": "2024-11-28", "strike": 24200.0, "call_implied_volatility": 13.1 },
            { "expiry": "2024-11-28", "strike": 24300.0 },
            { "expiry": "2024-12-26", "strike": 24150.0, "call_implied_volatility": 14.0 }
        ]
    }"#;

    fn snapshot() -> MarketSnapshot {
        serde_json::from_str(SNAPSHOT).unwrap()
    }

    fn args(valuation_date: &str, price: bool) -> CalibrateArgs {
        CalibrateArgs {
            valuation_date: Some(valuation_date.to_string()),
            day_count: None,
            price,
        }
    }

    fn config() -> CliConfig {
        CliConfig {
            simulations: 10_000,
            seed: Some(5),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_snapshot_json_accepts_both_date_formats() {
        let s = snapshot();
        assert_eq!(s.expiries[0], Date::from_ymd(2024, 11, 28).unwrap());
        assert_eq!(s.quotes.len(), 4);
        assert_eq!(s.quotes[2].call_implied_volatility, None);
    }

    #[test]
    fn test_equidistant_spot_takes_lower_strike() {
        let report = execute(&snapshot(), &args("2024-11-14", false), &config()).unwrap();
        assert_eq!(report.quote.atm_strike, 24_100.0);
        assert!(report.quote.approximate);
        assert!((report.quote.sigma - 0.138).abs() < 1e-12);
        assert!((report.quote.time_to_maturity - 14.0 / 365.0).abs() < 1e-12);
        assert!(report.pricing.is_none());
    }

    #[test]
    fn test_price_flag_adds_pricing() {
        let report = execute(&snapshot(), &args("14-Nov-2024", true), &config()).unwrap();
        let pricing = report.pricing.unwrap();
        assert!(pricing.call_price > 0.0);
        assert!(pricing.put_price > 0.0);
        assert_eq!(pricing.seed, 5);
    }

    #[test]
    fn test_day_count_option() {
        let act360 = CalibrateArgs {
            day_count: Some("ACT/360".to_string()),
            ..args("2024-11-14", false)
        };
        let report = execute(&snapshot(), &act360, &config()).unwrap();
        assert!((report.quote.time_to_maturity - 14.0 / 360.0).abs() < 1e-12);

        let unknown = CalibrateArgs {
            day_count: Some("30/360".to_string()),
            ..args("2024-11-14", false)
        };
        assert!(matches!(
            execute(&snapshot(), &unknown, &config()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_expired_snapshot_rejected() {
        let err = execute(&snapshot(), &args("2024-12-01", false), &config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calibration(CalibrationError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_bad_valuation_date() {
        assert!(matches!(
            execute(&snapshot(), &args("yesterday", false), &config()),
            Err(CliError::Date(_))
        ));
    }

    #[test]
    fn test_table_uses_exchange_dates() {
        let report = execute(&snapshot(), &args("2024-11-14", true), &config()).unwrap();
        let table = render_table(&report);
        assert!(table.contains("Expiry         : 28-Nov-2024"));
        assert!(table.contains("Valuation date : 14-Nov-2024 (ACT/365)"));
        assert!(table.contains("(tie, lower strike)"));
        assert!(table.contains("Implied vol    : 13.80%"));
        assert!(table.contains("Seed           : 5"));
    }

    #[test]
    fn test_demo_snapshot_calibrates() {
        let demo: MarketSnapshot =
            serde_json::from_str(include_str!("../../../../demo/inputs/snapshot.json")).unwrap();
        let report = execute(&demo, &args("2024-11-21", false), &config()).unwrap();
        assert_eq!(report.quote.atm_strike, 24_150.0);
        assert!(!report.quote.approximate);
        assert_eq!(demo.quotes[0].put_implied_volatility, Some(15.10));
    }

    #[test]
    fn test_missing_snapshot_file() {
        let err = load_snapshot(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_load_snapshot_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("neutryx-mc-snapshot-{}.json", std::process::id()));
        std::fs::write(&path, SNAPSHOT).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, snapshot());
    }
}
