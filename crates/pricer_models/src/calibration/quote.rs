//! Snapshot-to-parameters calibration.

use pricer_core::types::{Date, DayCountConvention, PricingError, PricingParameters};
use tracing::{debug, warn};

use super::atm::select_atm_strike;
use super::error::CalibrationError;
use super::snapshot::MarketSnapshot;

/// Pricing inputs derived from a market snapshot.
///
/// The risk-free rate and simulation count are not part of the quote; they
/// are supplied when converting to [`PricingParameters`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalibratedQuote {
    /// Underlying level the quote was calibrated against.
    pub spot: f64,
    /// Nearest expiry.
    pub expiry: Date,
    /// Strike nearest to spot for `expiry`.
    pub atm_strike: f64,
    /// Call-side implied volatility as a decimal.
    pub sigma: f64,
    /// Time to maturity in years.
    pub time_to_maturity: f64,
    /// Set when the ATM strike was chosen by the tie rule.
    pub approximate: bool,
}

impl CalibratedQuote {
    /// Implied volatility in percent.
    #[inline]
    pub fn sigma_percent(&self) -> f64 {
        self.sigma * 100.0
    }

    /// Builds engine inputs from this quote.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if `rate` is not finite or `n_paths` is zero.
    pub fn to_pricing_parameters(
        &self,
        rate: f64,
        n_paths: usize,
    ) -> Result<PricingParameters, PricingError> {
        PricingParameters::new(
            self.spot,
            self.atm_strike,
            self.time_to_maturity,
            rate,
            self.sigma,
            n_paths,
        )
    }
}

/// Calibrates a snapshot against `valuation_date` using ACT/365 Fixed.
///
/// # Steps
///
/// 1. Nearest expiry = first listed expiry
/// 2. ATM strike = strike under that expiry nearest to spot (lower strike on ties)
/// 3. sigma = call implied volatility of the ATM strike / 100, taken from
///    the first row at that strike that quotes one
/// 4. T = (expiry - valuation_date) days / 365
///
/// # Errors
///
/// - `NoExpiriesAvailable` if the snapshot lists no expiry
/// - `NoStrikesForExpiry` if nothing is quoted for the nearest expiry
/// - `MissingImpliedVolatility` if no row at the ATM strike has a call
///   implied volatility
/// - `InvalidExpiry` if the expiry is not strictly after `valuation_date`
/// - `InvalidMarketData` for a non-positive spot or negative volatility
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::calibration::{calibrate, MarketSnapshot, OptionQuote};
///
/// let expiry = Date::from_ymd(2024, 12, 31).unwrap();
/// let snapshot = MarketSnapshot::new(
///     102.0,
///     vec![expiry],
///     [95.0, 100.0, 105.0]
///         .into_iter()
///         .map(|k| OptionQuote::new(expiry, k, Some(20.0)))
///         .collect(),
/// );
///
/// let quote = calibrate(&snapshot, Date::from_ymd(2024, 12, 1).unwrap()).unwrap();
/// assert_eq!(quote.atm_strike, 100.0);
/// assert!((quote.sigma - 0.20).abs() < 1e-12);
/// assert!((quote.time_to_maturity - 30.0 / 365.0).abs() < 1e-12);
/// ```
pub fn calibrate(
    snapshot: &MarketSnapshot,
    valuation_date: Date,
) -> Result<CalibratedQuote, CalibrationError> {
    calibrate_with_convention(
        snapshot,
        valuation_date,
        DayCountConvention::ActualActual365,
    )
}

/// Calibrates a snapshot against the local system date.
pub fn calibrate_today(snapshot: &MarketSnapshot) -> Result<CalibratedQuote, CalibrationError> {
    calibrate(snapshot, Date::today())
}

/// Calibrates a snapshot with an explicit day count convention.
///
/// See [`calibrate`] for the selection rules and error cases.
pub fn calibrate_with_convention(
    snapshot: &MarketSnapshot,
    valuation_date: Date,
    day_count: DayCountConvention,
) -> Result<CalibratedQuote, CalibrationError> {
    let spot = snapshot.spot;
    if !(spot > 0.0 && spot.is_finite()) {
        return Err(CalibrationError::invalid_market_data(format!(
            "spot must be positive and finite, got {}",
            spot
        )));
    }

    let expiry = snapshot
        .nearest_expiry()
        .ok_or(CalibrationError::NoExpiriesAvailable)?;

    if expiry <= valuation_date {
        return Err(CalibrationError::InvalidExpiry {
            expiry,
            valuation_date,
        });
    }

    let atm = select_atm_strike(spot, snapshot.quotes_for(expiry).map(|q| q.strike))
        .ok_or(CalibrationError::NoStrikesForExpiry { expiry })?;

    if atm.tied {
        warn!(
            spot,
            strike = atm.strike,
            "equidistant strikes around spot, lower strike selected"
        );
    }

    let implied_volatility = snapshot
        .quotes_for(expiry)
        .filter(|q| q.strike == atm.strike)
        .find_map(|q| q.call_implied_volatility)
        .ok_or(CalibrationError::MissingImpliedVolatility {
            strike: atm.strike,
            expiry,
        })?;

    if !(implied_volatility >= 0.0 && implied_volatility.is_finite()) {
        return Err(CalibrationError::invalid_market_data(format!(
            "implied volatility must be non-negative and finite, got {} for strike {}",
            implied_volatility, atm.strike
        )));
    }

    let quote = CalibratedQuote {
        spot,
        expiry,
        atm_strike: atm.strike,
        sigma: implied_volatility / 100.0,
        time_to_maturity: day_count.year_fraction_dates(valuation_date, expiry),
        approximate: atm.tied,
    };

    debug!(
        %expiry,
        %valuation_date,
        atm_strike = quote.atm_strike,
        sigma = quote.sigma,
        time_to_maturity = quote.time_to_maturity,
        "snapshot calibrated"
    );

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::OptionQuote;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn chain(spot: f64, expiry: Date, strikes: &[f64], iv: f64) -> MarketSnapshot {
        MarketSnapshot::new(
            spot,
            vec![expiry],
            strikes
                .iter()
                .map(|&k| OptionQuote::new(expiry, k, Some(iv)))
                .collect(),
        )
    }

    #[test]
    fn test_atm_exact_match() {
        let expiry = date(2025, 1, 30);
        let snapshot = chain(100.0, expiry, &[90.0, 95.0, 100.0, 105.0], 18.0);

        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        assert_eq!(quote.atm_strike, 100.0);
        assert_eq!(quote.expiry, expiry);
        assert!(!quote.approximate);
    }

    #[test]
    fn test_atm_nearest() {
        let snapshot = chain(102.0, date(2025, 1, 30), &[95.0, 100.0, 105.0], 18.0);
        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        assert_eq!(quote.atm_strike, 100.0);
    }

    #[test]
    fn test_sigma_converted_from_percent() {
        let snapshot = chain(100.0, date(2025, 1, 30), &[100.0], 13.75);
        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        assert_relative_eq!(quote.sigma, 0.1375, epsilon = 1e-15);
        assert_relative_eq!(quote.sigma_percent(), 13.75, epsilon = 1e-12);
    }

    #[test]
    fn test_time_to_maturity_act_365() {
        let snapshot = chain(100.0, date(2025, 3, 2), &[100.0], 20.0);
        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        assert_relative_eq!(quote.time_to_maturity, 60.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_time_to_maturity_act_360() {
        let snapshot = chain(100.0, date(2025, 3, 2), &[100.0], 20.0);
        let quote = calibrate_with_convention(
            &snapshot,
            date(2025, 1, 1),
            DayCountConvention::ActualActual360,
        )
        .unwrap();
        assert_relative_eq!(quote.time_to_maturity, 60.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_only_nearest_expiry_strikes_considered() {
        let near = date(2025, 1, 30);
        let far = date(2025, 2, 27);
        let snapshot = MarketSnapshot::new(
            100.0,
            vec![near, far],
            vec![
                OptionQuote::new(far, 100.0, Some(25.0)),
                OptionQuote::new(near, 110.0, Some(19.0)),
                OptionQuote::new(near, 90.0, Some(21.0)),
            ],
        );

        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        // 90 and 110 tie at 10 away, far-expiry 100 is ignored
        assert_eq!(quote.atm_strike, 90.0);
        assert!(quote.approximate);
        assert_relative_eq!(quote.sigma, 0.21, epsilon = 1e-15);
    }

    #[test]
    fn test_no_expiries() {
        let snapshot = MarketSnapshot::new(100.0, Vec::new(), Vec::new());
        assert_eq!(
            calibrate(&snapshot, date(2025, 1, 1)),
            Err(CalibrationError::NoExpiriesAvailable)
        );
    }

    #[test]
    fn test_no_strikes_for_expiry() {
        let near = date(2025, 1, 30);
        let far = date(2025, 2, 27);
        let snapshot = MarketSnapshot::new(
            100.0,
            vec![near, far],
            vec![OptionQuote::new(far, 100.0, Some(20.0))],
        );
        assert_eq!(
            calibrate(&snapshot, date(2025, 1, 1)),
            Err(CalibrationError::NoStrikesForExpiry { expiry: near })
        );
    }

    #[test]
    fn test_missing_implied_volatility() {
        let expiry = date(2025, 1, 30);
        let snapshot = MarketSnapshot::new(
            100.0,
            vec![expiry],
            vec![
                OptionQuote::new(expiry, 100.0, None),
                OptionQuote::new(expiry, 105.0, Some(20.0)),
            ],
        );
        assert_eq!(
            calibrate(&snapshot, date(2025, 1, 1)),
            Err(CalibrationError::MissingImpliedVolatility {
                strike: 100.0,
                expiry
            })
        );
    }

    #[test]
    fn test_duplicate_strike_rows_use_first_quoted_volatility() {
        let expiry = date(2025, 1, 30);
        let snapshot = MarketSnapshot::new(
            100.0,
            vec![expiry],
            vec![
                OptionQuote::new(expiry, 100.0, None),
                OptionQuote::new(expiry, 100.0, Some(20.0)),
                OptionQuote::new(expiry, 100.0, Some(35.0)),
                OptionQuote::new(expiry, 105.0, Some(22.0)),
            ],
        );
        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();
        assert_eq!(quote.atm_strike, 100.0);
        assert_relative_eq!(quote.sigma, 0.20, epsilon = 1e-12);
        assert!(!quote.approximate);
    }

    #[test]
    fn test_past_expiry_rejected() {
        let expiry = date(2024, 6, 27);
        let snapshot = chain(100.0, expiry, &[100.0], 20.0);
        let valuation_date = date(2025, 1, 1);
        assert_eq!(
            calibrate(&snapshot, valuation_date),
            Err(CalibrationError::InvalidExpiry {
                expiry,
                valuation_date
            })
        );
    }

    #[test]
    fn test_same_day_expiry_rejected() {
        let expiry = date(2025, 1, 1);
        let snapshot = chain(100.0, expiry, &[100.0], 20.0);
        assert!(matches!(
            calibrate(&snapshot, expiry),
            Err(CalibrationError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn test_invalid_spot_rejected() {
        let snapshot = chain(0.0, date(2025, 1, 30), &[100.0], 20.0);
        assert!(matches!(
            calibrate(&snapshot, date(2025, 1, 1)),
            Err(CalibrationError::InvalidMarketData { .. })
        ));
    }

    #[test]
    fn test_negative_implied_volatility_rejected() {
        let snapshot = chain(100.0, date(2025, 1, 30), &[100.0], -4.0);
        assert!(matches!(
            calibrate(&snapshot, date(2025, 1, 1)),
            Err(CalibrationError::InvalidMarketData { .. })
        ));
    }

    #[test]
    fn test_to_pricing_parameters() {
        let snapshot = chain(24_150.0, date(2025, 1, 30), &[24_100.0, 24_200.0], 14.0);
        let quote = calibrate(&snapshot, date(2025, 1, 1)).unwrap();

        let params = quote.to_pricing_parameters(0.07, 50_000).unwrap();
        assert_eq!(params.spot(), 24_150.0);
        assert_eq!(params.strike(), 24_100.0);
        assert_eq!(params.rate(), 0.07);
        assert_relative_eq!(params.volatility(), 0.14, epsilon = 1e-15);
        assert_eq!(params.n_paths(), 50_000);

        assert!(quote.to_pricing_parameters(0.07, 0).is_err());
    }
}
