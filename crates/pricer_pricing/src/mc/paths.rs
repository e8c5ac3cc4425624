//! Terminal price sampling for Monte Carlo simulation.
//!
//! This module maps standard normal draws to discounted terminal asset
//! prices using the exact solution of Geometric Brownian Motion at maturity.
//! Because the solution is exact, one step reaches `T` regardless of its
//! magnitude.

use pricer_core::types::PricingParameters;

/// Precomputed discounted terminal-price map for Geometric Brownian Motion.
///
/// # Model
///
/// Under the risk-neutral measure:
/// ```text
/// dS = r S dt + σ S dW
/// S_T = S · exp((r − ½σ²)T + σ√T · Z)
/// e^{-rT} S_T = S · exp(−½σ²T + σ√T · Z)
/// ```
///
/// The rate never enters the exponent, so the discounted price stays finite
/// for any finite `rT`. Payoffs are then taken against the discounted strike
/// `K · e^{-rT}`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingParameters;
/// use pricer_pricing::mc::GbmTerminal;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, 1).unwrap();
/// let terminal = GbmTerminal::new(&params);
///
/// // Zero volatility: the discounted terminal price is the spot
/// assert_eq!(terminal.discounted_sample(1.7), 100.0);
/// assert!((terminal.discounted_strike() - 100.0 * (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmTerminal {
    spot: f64,
    /// −½σ²T
    drift: f64,
    /// σ√T
    diffusion: f64,
    /// K·e^{-rT}
    discounted_strike: f64,
}

impl GbmTerminal {
    /// Precomputes the drift, diffusion and discounted strike for `params`.
    #[inline]
    pub fn new(params: &PricingParameters) -> Self {
        let sigma = params.volatility();
        let maturity = params.maturity();
        Self {
            spot: params.spot(),
            drift: -0.5 * sigma * sigma * maturity,
            diffusion: sigma * maturity.sqrt(),
            discounted_strike: params.strike() * params.discount_factor(),
        }
    }

    /// Discounted terminal price `e^{-rT} S_T` for one standard normal draw `z`.
    #[inline]
    pub fn discounted_sample(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }

    /// Strike discounted to today.
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.discounted_strike
    }
}
