//! Option-chain market snapshot.
//!
//! A snapshot is produced once per calibration run by whatever owns the
//! market-data feed and is read-only from here on.

use pricer_core::types::Date;

/// One strike row of an option chain.
///
/// Implied volatility is carried as delivered by the feed, in percent
/// (e.g. `14.2` for 14.2%).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Expiry this row belongs to.
    pub expiry: Date,
    /// Strike price.
    pub strike: f64,
    /// Call-side implied volatility in percent, if quoted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub call_implied_volatility: Option<f64>,
    /// Put-side implied volatility in percent, if quoted.
    ///
    /// Carried for completeness; calibration reads the call side only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub put_implied_volatility: Option<f64>,
}

impl OptionQuote {
    /// Creates a quote row.
    pub fn new(expiry: Date, strike: f64, call_implied_volatility: Option<f64>) -> Self {
        Self {
            expiry,
            strike,
            call_implied_volatility,
            put_implied_volatility: None,
        }
    }

    /// Sets the put-side implied volatility.
    pub fn with_put_implied_volatility(mut self, volatility: f64) -> Self {
        self.put_implied_volatility = Some(volatility);
        self
    }
}

/// Market snapshot of an option chain.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::calibration::{MarketSnapshot, OptionQuote};
///
/// let expiry = Date::from_ymd(2024, 11, 28).unwrap();
/// let snapshot = MarketSnapshot::new(
///     24_150.0,
///     vec![expiry],
///     vec![
///         OptionQuote::new(expiry, 24_100.0, Some(13.8)),
///         OptionQuote::new(expiry, 24_200.0, Some(13.1)),
///     ],
/// );
///
/// assert_eq!(snapshot.nearest_expiry(), Some(expiry));
/// assert_eq!(snapshot.quotes_for(expiry).count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Current underlying level.
    pub spot: f64,
    /// Available expiries, ascending as delivered by the feed.
    pub expiries: Vec<Date>,
    /// Strike rows across all expiries.
    pub quotes: Vec<OptionQuote>,
}

impl MarketSnapshot {
    /// Creates a snapshot.
    pub fn new(spot: f64, expiries: Vec<Date>, quotes: Vec<OptionQuote>) -> Self {
        Self {
            spot,
            expiries,
            quotes,
        }
    }

    /// Returns the nearest expiry: the first listed one.
    ///
    /// The feed delivers expiries sorted ascending, so the list is not
    /// re-sorted here.
    #[inline]
    pub fn nearest_expiry(&self) -> Option<Date> {
        self.expiries.first().copied()
    }

    /// Iterates over the rows quoted for `expiry`, in source order.
    pub fn quotes_for(&self, expiry: Date) -> impl Iterator<Item = &OptionQuote> + '_ {
        self.quotes.iter().filter(move |q| q.expiry == expiry)
    }
}
