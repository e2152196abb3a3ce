// File: crates/burndown-core/src/fit.rs
// Summary: Ordinary least-squares line over (epoch ms, value) samples.
// Notes:
// - Sums are accumulated on times shifted to the first sample and scaled to
//   days. Raw epoch milliseconds squared are ~1e24 and lose most of the
//   variance term to cancellation.
// - Public accessors report slope/intercept in epoch-millisecond units.

use crate::error::FitError;
use crate::types::{days_to_ms, ms_to_days, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    origin: Timestamp,
    /// Value of the line at `origin`.
    level: f64,
    /// Change per day.
    slope_per_day: f64,
}

impl LinearFit {
    /// Fit `y = slope * t + intercept` to `points`.
    pub fn fit(points: &[(Timestamp, f64)]) -> Result<Self, FitError> {
        let n = points.len();
        if n < 2 { return Err(FitError::TooFewPoints(n)); }

        let origin = points[0].0;
        let mut sx = 0.0f64;
        let mut sy = 0.0f64;
        let mut sxx = 0.0f64;
        let mut sxy = 0.0f64;
        for &(t, y) in points {
            let x = ms_to_days(t - origin);
            sx += x;
            sy += y;
            sxx += x * x;
            sxy += x * y;
        }
        let nf = n as f64;
        let denom = nf * sxx - sx * sx;
        // Relative threshold: denom scales with n^2 * spread^2.
        if denom.abs() <= f64::EPSILON * nf * sxx.abs().max(f64::MIN_POSITIVE) {
            return Err(FitError::DegenerateTimes);
        }
        let slope_per_day = (nf * sxy - sx * sy) / denom;
        let level = (sy - slope_per_day * sx) / nf;
        Ok(Self { origin, level, slope_per_day })
    }

    /// Slope in value units per millisecond.
    pub fn slope(&self) -> f64 { self.slope_per_day / days_to_ms(1.0) }

    /// Slope in value units per day.
    pub fn slope_per_day(&self) -> f64 { self.slope_per_day }

    /// Value of the line at epoch 0.
    pub fn intercept(&self) -> f64 { self.value_at(0.0) }

    #[inline]
    pub fn value_at(&self, t: Timestamp) -> f64 {
        self.level + self.slope_per_day * ms_to_days(t - self.origin)
    }

    /// Time at which the line reaches zero.
    pub fn zero_crossing(&self) -> Result<Timestamp, FitError> {
        if self.slope_per_day == 0.0 || !self.slope_per_day.is_finite() {
            return Err(FitError::ZeroSlope);
        }
        Ok(self.origin + days_to_ms(-self.level / self.slope_per_day))
    }
}
