//! Call and put price surfaces over a spot × volatility grid.

/// Call and put price matrices with their axes.
///
/// Matrices are indexed `[vol_index][spot_index]`: one row per volatility,
/// one column per spot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSurface {
    /// Spot values labelling the columns.
    pub spot_axis: Vec<f64>,
    /// Volatility values labelling the rows.
    pub vol_axis: Vec<f64>,
    /// Call prices, `call[i][j]` at `vol_axis[i]`, `spot_axis[j]`.
    pub call: Vec<Vec<f64>>,
    /// Put prices, same layout as `call`.
    pub put: Vec<Vec<f64>>,
    /// Base seed the per-cell seeds were derived from.
    pub seed: u64,
}

impl PriceSurface {
    /// Number of rows (volatility points).
    #[inline]
    pub fn rows(&self) -> usize {
        self.vol_axis.len()
    }

    /// Number of columns (spot points).
    #[inline]
    pub fn cols(&self) -> usize {
        self.spot_axis.len()
    }

    /// True when either axis is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Call price at (`vol_index`, `spot_index`).
    pub fn call_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.call.get(vol_index)?.get(spot_index).copied()
    }

    /// Put price at (`vol_index`, `spot_index`).
    pub fn put_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.put.get(vol_index)?.get(spot_index).copied()
    }
}
