//! Sequential and parallel grid sweeps.

use pricer_core::types::PricingParameters;
use rayon::prelude::*;
use tracing::debug;

use super::axes::GridSettings;
use super::error::SweepError;
use super::surface::PriceSurface;
use crate::mc::{price, MonteCarloConfig, PriceResult};
use crate::rng::{derive_seed, PricerRng};

/// Fixed contract terms and the two axes to sweep.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::sweep::SweepInputs;
///
/// let inputs = SweepInputs::new(100.0, 1.0, 0.05, vec![90.0, 100.0, 110.0], vec![0.2]);
/// assert_eq!(inputs.cell_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SweepInputs {
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Risk-free rate (r).
    pub rate: f64,
    /// Spot values, one per column.
    pub spot_axis: Vec<f64>,
    /// Volatility values, one per row.
    pub vol_axis: Vec<f64>,
}

impl SweepInputs {
    /// Creates sweep inputs from explicit axes.
    pub fn new(
        strike: f64,
        maturity: f64,
        rate: f64,
        spot_axis: Vec<f64>,
        vol_axis: Vec<f64>,
    ) -> Self {
        Self {
            strike,
            maturity,
            rate,
            spot_axis,
            vol_axis,
        }
    }

    /// Builds axes around the spot and volatility of `base`.
    ///
    /// Strike, maturity and rate are taken from `base` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::types::PricingParameters;
    /// use pricer_pricing::sweep::{GridSettings, SweepInputs};
    ///
    /// let base = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 1_000).unwrap();
    /// let inputs = SweepInputs::around(&base, &GridSettings::default());
    /// assert_eq!(inputs.spot_axis.len(), 10);
    /// assert_eq!(inputs.vol_axis.len(), 10);
    /// ```
    pub fn around(base: &PricingParameters, grid: &GridSettings) -> Self {
        Self::new(
            base.strike(),
            base.maturity(),
            base.rate(),
            grid.spot_axis(base.spot()),
            grid.vol_axis(base.volatility()),
        )
    }

    /// Number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.spot_axis.len() * self.vol_axis.len()
    }

    /// Validated parameters for every cell, row-major (vol, then spot).
    fn cells(&self, n_paths: usize) -> Result<Vec<PricingParameters>, SweepError> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for (vol_index, &vol) in self.vol_axis.iter().enumerate() {
            for (spot_index, &spot) in self.spot_axis.iter().enumerate() {
                let params =
                    PricingParameters::new(spot, self.strike, self.maturity, self.rate, vol, n_paths)
                        .map_err(|source| SweepError::InvalidCell {
                            vol_index,
                            spot_index,
                            source,
                        })?;
                cells.push(params);
            }
        }
        Ok(cells)
    }
}

/// Prices every (vol, spot) cell sequentially.
///
/// Each cell is an independent simulation with seed
/// `derive_seed(base, vol_index * cols + spot_index)`, where `base` is the
/// configured seed or one entropy draw per sweep. Cell (0, 0) therefore
/// reproduces a direct [`price`] call with the base seed.
///
/// All cells are validated before any simulation runs. An empty axis yields
/// an empty surface.
///
/// # Errors
///
/// Returns [`SweepError::InvalidCell`] for the first cell whose parameters
/// are out of range.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingParameters;
/// use pricer_pricing::mc::{price, MonteCarloConfig};
/// use pricer_pricing::sweep::{sweep, SweepInputs};
///
/// let config = MonteCarloConfig::builder().n_paths(5_000).seed(42).build().unwrap();
/// let inputs = SweepInputs::new(100.0, 1.0, 0.05, vec![100.0], vec![0.2]);
/// let surface = sweep(&inputs, &config).unwrap();
///
/// let direct = price(
///     &PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 5_000).unwrap(),
///     Some(42),
/// );
/// assert_eq!(surface.call_at(0, 0), Some(direct.call_price));
/// ```
pub fn sweep(inputs: &SweepInputs, config: &MonteCarloConfig) -> Result<PriceSurface, SweepError> {
    let cells = inputs.cells(config.n_paths())?;
    let base_seed = base_seed(config);
    log_start(inputs, config, base_seed, false);

    let results: Vec<PriceResult> = cells
        .iter()
        .enumerate()
        .map(|(index, params)| price(params, Some(derive_seed(base_seed, index))))
        .collect();

    Ok(assemble(inputs, base_seed, &results))
}

/// Prices every cell on the rayon thread pool.
///
/// Produces a surface bit-identical to [`sweep`] for the same inputs and
/// seed: cell seeds depend only on the cell index.
///
/// # Errors
///
/// Same as [`sweep`].
pub fn sweep_parallel(
    inputs: &SweepInputs,
    config: &MonteCarloConfig,
) -> Result<PriceSurface, SweepError> {
    let cells = inputs.cells(config.n_paths())?;
    let base_seed = base_seed(config);
    log_start(inputs, config, base_seed, true);

    let results: Vec<PriceResult> = cells
        .par_iter()
        .enumerate()
        .map(|(index, params)| price(params, Some(derive_seed(base_seed, index))))
        .collect();

    Ok(assemble(inputs, base_seed, &results))
}

fn base_seed(config: &MonteCarloConfig) -> u64 {
    config.seed().unwrap_or_else(PricerRng::entropy_seed)
}

fn log_start(inputs: &SweepInputs, config: &MonteCarloConfig, seed: u64, parallel: bool) {
    debug!(
        rows = inputs.vol_axis.len(),
        cols = inputs.spot_axis.len(),
        n_paths = config.n_paths(),
        seed,
        parallel,
        "starting grid sweep"
    );
}

/// Reshapes row-major cell results into call and put matrices.
fn assemble(inputs: &SweepInputs, seed: u64, results: &[PriceResult]) -> PriceSurface {
    let cols = inputs.spot_axis.len();
    let rows = inputs.vol_axis.len();

    let mut call = Vec::with_capacity(rows);
    let mut put = Vec::with_capacity(rows);
    for row in 0..rows {
        let cells = &results[row * cols..(row + 1) * cols];
        call.push(cells.iter().map(|r| r.call_price).collect());
        put.push(cells.iter().map(|r| r.put_price).collect());
    }

    PriceSurface {
        spot_axis: inputs.spot_axis.clone(),
        vol_axis: inputs.vol_axis.clone(),
        call,
        put,
        seed,
    }
}
