//! Monte Carlo pricing of European calls and puts.
//!
//! # Overview
//!
//! A pricing call:
//! 1. Draws N standard normals from a generator it owns (via [`PricerRng`])
//! 2. Maps each draw to a discounted terminal price (via [`GbmTerminal`])
//! 3. Accumulates call and put payoffs against the discounted strike
//! 4. Reports the sample means as prices
//!
//! Discounting happens inside each sample, so no `0 · ∞` product appears
//! when `exp(rT)` overflows.
//!
//! Calls carry no state between invocations; every call is a pure function
//! of its parameters and seed.

use pricer_core::types::PricingParameters;
use tracing::trace;

use super::paths::GbmTerminal;
use super::payoff::{call_payoff, put_payoff, PayoffAccumulator};
use crate::rng::PricerRng;

/// Normal draws generated per batch.
const BATCH_SIZE: usize = 4096;

/// Call and put prices from one simulation.
///
/// Both prices come from the same set of terminal prices.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PriceResult;
///
/// let result = PriceResult {
///     call_price: 10.45,
///     put_price: 5.57,
///     call_std_error: 0.05,
///     put_std_error: 0.03,
///     seed: 42,
/// };
///
/// println!("Call: {} +/- {}", result.call_price, result.call_confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceResult {
    /// Discounted mean call payoff.
    pub call_price: f64,
    /// Discounted mean put payoff.
    pub put_price: f64,
    /// Standard error of the call estimate.
    pub call_std_error: f64,
    /// Standard error of the put estimate.
    pub put_std_error: f64,
    /// Seed of the generator that produced the draws.
    pub seed: u64,
}

impl PriceResult {
    /// Returns the 95% confidence interval half-width of the call price.
    #[inline]
    pub fn call_confidence_95(&self) -> f64 {
        1.96 * self.call_std_error
    }

    /// Returns the 95% confidence interval half-width of the put price.
    #[inline]
    pub fn put_confidence_95(&self) -> f64 {
        1.96 * self.put_std_error
    }
}

/// Prices a European call and put by plain Monte Carlo.
///
/// # Arguments
///
/// * `params` - Validated pricing inputs
/// * `seed` - Explicit seed for reproducible draws; `None` draws fresh entropy
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingParameters;
/// use pricer_pricing::mc::price;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 10_000).unwrap();
///
/// let a = price(&params, Some(7));
/// let b = price(&params, Some(7));
/// assert_eq!(a, b);
///
/// // At expiry the price is the intrinsic value
/// let expired = PricingParameters::new(110.0, 100.0, 0.0, 0.05, 0.2, 10).unwrap();
/// let intrinsic = price(&expired, None);
/// assert!((intrinsic.call_price - 10.0).abs() < 1e-9);
/// assert_eq!(intrinsic.put_price, 0.0);
/// ```
pub fn price(params: &PricingParameters, seed: Option<u64>) -> PriceResult {
    let mut rng = PricerRng::from_optional_seed(seed);
    price_with_rng(params, &mut rng)
}

/// Prices a European call and put with caller-owned generator state.
///
/// Consumes exactly `params.n_paths()` normal draws from `rng`. The draws
/// are taken even when the terminal price is deterministic (`T = 0` or
/// `σ = 0`), so generator state advances identically for all inputs.
pub fn price_with_rng(params: &PricingParameters, rng: &mut PricerRng) -> PriceResult {
    let n_paths = params.n_paths();
    let strike = params.strike();
    let terminal = GbmTerminal::new(params);
    let discounted_strike = terminal.discounted_strike();

    let mut calls = PayoffAccumulator::default();
    let mut puts = PayoffAccumulator::default();

    let mut buffer = vec![0.0; n_paths.min(BATCH_SIZE)];
    let mut remaining = n_paths;
    while remaining > 0 {
        let batch = &mut buffer[..remaining.min(BATCH_SIZE)];
        rng.fill_normal(batch);

        for &z in batch.iter() {
            let st = terminal.discounted_sample(z);
            calls.push(call_payoff(st, discounted_strike));
            puts.push(put_payoff(st, discounted_strike));
        }

        remaining -= batch.len();
    }

    let result = PriceResult {
        call_price: calls.mean(),
        put_price: puts.mean(),
        call_std_error: calls.std_error(),
        put_std_error: puts.std_error(),
        seed: rng.seed(),
    };

    trace!(
        spot = params.spot(),
        strike,
        volatility = params.volatility(),
        n_paths,
        seed = result.seed,
        call = result.call_price,
        put = result.put_price,
        "priced european pair"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        vol: f64,
        n: usize,
    ) -> PricingParameters {
        PricingParameters::new(spot, strike, maturity, rate, vol, n).unwrap()
    }

    #[test]
    fn test_zero_maturity_is_intrinsic() {
        let itm_call = price(&params(110.0, 100.0, 0.0, 0.05, 0.3, 1_000), Some(1));
        assert_relative_eq!(itm_call.call_price, 10.0, epsilon = 1e-9);
        assert_eq!(itm_call.put_price, 0.0);

        let itm_put = price(&params(90.0, 100.0, 0.0, 0.05, 0.3, 1_000), Some(1));
        assert_eq!(itm_put.call_price, 0.0);
        assert_relative_eq!(itm_put.put_price, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_volatility_is_discounted_forward() {
        let (s, k, t, r) = (100.0, 100.0, 1.0, 0.05);
        let result = price(&params(s, k, t, r, 0.0, 5_000), Some(3));

        let df = (-r * t).exp();
        let expected_call = (s * (r * t).exp() - k).max(0.0) * df;
        let expected_put = (k - s * (r * t).exp()).max(0.0) * df;

        assert_relative_eq!(result.call_price, expected_call, max_relative = 1e-9);
        assert_eq!(result.put_price, expected_put);
        assert!(result.call_std_error < 1e-6);
    }

    #[test]
    fn test_single_path() {
        let result = price(&params(100.0, 100.0, 1.0, 0.05, 0.2, 1), Some(9));
        assert!(result.call_price >= 0.0);
        assert!(result.put_price >= 0.0);
        // One draw lands on one side of the strike
        assert!(result.call_price == 0.0 || result.put_price == 0.0);
        assert_eq!(result.call_std_error, 0.0);
    }

    #[test]
    fn test_seeded_calls_bit_identical() {
        let p = params(100.0, 95.0, 0.75, 0.03, 0.25, 20_000);
        let a = price(&p, Some(42));
        let b = price(&p, Some(42));

        assert_eq!(a.call_price.to_bits(), b.call_price.to_bits());
        assert_eq!(a.put_price.to_bits(), b.put_price.to_bits());
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_different_seeds_differ() {
        let p = params(100.0, 100.0, 1.0, 0.05, 0.2, 1_000);
        assert_ne!(price(&p, Some(1)).call_price, price(&p, Some(2)).call_price);
    }

    #[test]
    fn test_unseeded_result_is_replayable() {
        let p = params(100.0, 100.0, 1.0, 0.05, 0.2, 2_000);
        let first = price(&p, None);
        let replay = price(&p, Some(first.seed));
        assert_eq!(first, replay);
    }

    #[test]
    fn test_price_with_rng_matches_price() {
        let p = params(100.0, 100.0, 1.0, 0.05, 0.2, 10_000);
        let mut rng = PricerRng::from_seed(11);
        assert_eq!(price_with_rng(&p, &mut rng), price(&p, Some(11)));
    }

    #[test]
    fn test_batching_consumes_exact_draws() {
        // n_paths spans several batches with a partial tail
        let n = 2 * BATCH_SIZE + 17;
        let p = params(100.0, 100.0, 1.0, 0.05, 0.2, n);

        let mut rng = PricerRng::from_seed(5);
        price_with_rng(&p, &mut rng);

        let mut reference = PricerRng::from_seed(5);
        for _ in 0..n {
            reference.gen_normal();
        }
        assert_eq!(rng.gen_normal().to_bits(), reference.gen_normal().to_bits());
    }

    #[test]
    fn test_prices_non_negative() {
        for (s, k, vol) in [(50.0, 150.0, 0.1), (150.0, 50.0, 0.1), (100.0, 100.0, 0.9)] {
            let result = price(&params(s, k, 1.0, 0.05, vol, 2_000), Some(8));
            assert!(result.call_price >= 0.0);
            assert!(result.put_price >= 0.0);
        }
    }

    #[test]
    fn test_extreme_rate_gives_finite_prices() {
        // exp(rT) overflows; the call tends to the spot and the put to zero
        let result = price(&params(100.0, 100.0, 10.0, 100.0, 0.2, 1_000), Some(1));
        assert!(result.call_price.is_finite() && result.call_price >= 0.0);
        assert!(result.call_std_error.is_finite());
        assert_eq!(result.put_price, 0.0);
        assert_relative_eq!(result.call_price, 100.0, max_relative = 0.15);
    }

    #[test]
    fn test_negative_rate_accepted() {
        let result = price(&params(100.0, 100.0, 1.0, -0.01, 0.2, 10_000), Some(4));
        assert!(result.call_price > 0.0);
        assert!(result.put_price > 0.0);
    }
}
