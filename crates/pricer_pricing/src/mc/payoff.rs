//! Vanilla European payoffs and their running estimators.

/// Call payoff `max(S_T − K, 0)`.
#[inline]
pub fn call_payoff(terminal: f64, strike: f64) -> f64 {
    (terminal - strike).max(0.0)
}

/// Put payoff `max(K − S_T, 0)`.
#[inline]
pub fn put_payoff(terminal: f64, strike: f64) -> f64 {
    (strike - terminal).max(0.0)
}

/// Running sum and sum of squares of payoff samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffAccumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PayoffAccumulator {
    /// Adds one payoff sample.
    #[inline]
    pub fn push(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        self.count += 1;
    }

    /// Number of samples seen.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean; 0 when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Standard error of the mean; 0 with fewer than two samples.
    pub fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        // Rounding can push the variance of identical samples slightly below 0
        let variance = ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}
