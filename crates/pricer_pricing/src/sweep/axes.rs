//! Grid axis construction for spot/volatility sweeps.

/// Evenly spaced values from `start` to `end` inclusive.
///
/// `n = 0` yields an empty vector and `n = 1` yields `[start]`. The last
/// element is exactly `end`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::sweep::linspace;
///
/// assert_eq!(linspace(80.0, 120.0, 5), vec![80.0, 90.0, 100.0, 110.0, 120.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Settings for building sweep axes around a base spot and volatility.
///
/// Defaults: 10 points per axis, spot in `[0.8·S, 1.2·S]`, volatility in
/// `[0.5·σ, 1.5·σ]` clamped to `[0.01, 1.0]`, spot floored at 0.01.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridSettings {
    /// Points per axis.
    pub points: usize,
    /// Lower spot multiplier.
    pub spot_low: f64,
    /// Upper spot multiplier.
    pub spot_high: f64,
    /// Smallest admissible spot on the axis.
    pub spot_floor: f64,
    /// Lower volatility multiplier.
    pub vol_low: f64,
    /// Upper volatility multiplier.
    pub vol_high: f64,
    /// Smallest volatility on the axis.
    pub vol_floor: f64,
    /// Largest volatility on the axis.
    pub vol_cap: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            points: 10,
            spot_low: 0.8,
            spot_high: 1.2,
            spot_floor: 0.01,
            vol_low: 0.5,
            vol_high: 1.5,
            vol_floor: 0.01,
            vol_cap: 1.0,
        }
    }
}

impl GridSettings {
    /// Spot axis around `spot`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::sweep::GridSettings;
    ///
    /// let axis = GridSettings::default().spot_axis(100.0);
    /// assert_eq!(axis.len(), 10);
    /// assert!((axis[0] - 80.0).abs() < 1e-12);
    /// assert!((axis[9] - 120.0).abs() < 1e-12);
    /// ```
    pub fn spot_axis(&self, spot: f64) -> Vec<f64> {
        linspace(
            (spot * self.spot_low).max(self.spot_floor),
            (spot * self.spot_high).max(self.spot_floor),
            self.points,
        )
    }

    /// Volatility axis around `volatility`, clamped to `[vol_floor, vol_cap]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::sweep::GridSettings;
    ///
    /// let axis = GridSettings::default().vol_axis(0.9);
    /// assert!((axis[0] - 0.45).abs() < 1e-12);
    /// // 1.5 × 0.9 is capped at 1.0
    /// assert_eq!(axis[9], 1.0);
    /// ```
    pub fn vol_axis(&self, volatility: f64) -> Vec<f64> {
        let clamp = |v: f64| v.max(self.vol_floor).min(self.vol_cap);
        linspace(
            clamp(volatility * self.vol_low),
            clamp(volatility * self.vol_high),
            self.points,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_exact() {
        let axis = linspace(0.1, 0.3, 7);
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[0], 0.1);
        assert_eq!(axis[6], 0.3);
        for pair in axis.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let axis = linspace(1.0, 0.0, 3);
        assert_eq!(axis, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_default_axes() {
        let settings = GridSettings::default();

        let spots = settings.spot_axis(100.0);
        assert_relative_eq!(spots[0], 80.0, epsilon = 1e-12);
        assert_relative_eq!(spots[9], 120.0, epsilon = 1e-12);

        let vols = settings.vol_axis(0.2);
        assert_relative_eq!(vols[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(vols[9], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_vol_axis_floor() {
        let vols = GridSettings::default().vol_axis(0.0);
        assert!(vols.iter().all(|&v| v == 0.01));
    }

    #[test]
    fn test_custom_points() {
        let settings = GridSettings {
            points: 3,
            ..GridSettings::default()
        };
        assert_eq!(settings.spot_axis(50.0).len(), 3);
        assert_eq!(settings.vol_axis(0.3).len(), 3);
    }

    #[test]
    fn test_zero_points_gives_empty_axes() {
        let settings = GridSettings {
            points: 0,
            ..GridSettings::default()
        };
        assert!(settings.spot_axis(100.0).is_empty());
        assert!(settings.vol_axis(0.2).is_empty());
    }
}
