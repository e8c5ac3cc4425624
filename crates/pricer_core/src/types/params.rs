//! Scalar inputs of a single European option pricing call.

use super::error::PricingError;

/// Validated inputs for one Monte Carlo pricing call.
///
/// # Invariants
///
/// - `spot`, `strike` strictly positive and finite
/// - `maturity`, `volatility` non-negative and finite
/// - `rate` finite (may be negative)
/// - `n_paths` at least 1
///
/// `maturity = 0` and `volatility = 0` are admissible degenerate cases in
/// which the terminal price is deterministic.
///
/// # Examples
///
/// ```
/// use pricer_core::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 100_000).unwrap();
/// assert_eq!(params.n_paths(), 100_000);
///
/// // Negative volatility is rejected
/// assert!(PricingParameters::new(100.0, 100.0, 1.0, 0.05, -0.2, 1_000).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParameters {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    n_paths: usize,
}

impl PricingParameters {
    /// Creates validated pricing parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `maturity` - Time to maturity in years (T)
    /// * `rate` - Annualised continuously compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    /// * `n_paths` - Number of simulated terminal prices (N)
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` naming the first input that
    /// violates its range.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        n_paths: usize,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            n_paths,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(PricingError::not_positive("spot", self.spot));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(PricingError::not_positive("strike", self.strike));
        }
        if !(self.maturity >= 0.0 && self.maturity.is_finite()) {
            return Err(PricingError::negative("maturity", self.maturity));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::not_finite("rate", self.rate));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(PricingError::negative("volatility", self.volatility));
        }
        if self.n_paths == 0 {
            return Err(PricingError::not_positive("n_paths", 0.0));
        }
        Ok(())
    }

    /// Spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Simulation count (N).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}
