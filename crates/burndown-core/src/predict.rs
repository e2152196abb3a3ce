// File: crates/burndown-core/src/predict.rs
// Summary: Experimental cubic burn-down prediction, truncated before it goes negative or turns up.

use serde::Deserialize;

use crate::error::{BurndownError, Result};
use crate::schedule::ReleaseSchedule;
use crate::types::{days_to_ms, ms_to_days, Timestamp, SECONDS_PER_DAY};

/// Divisors used to calibrate the cubic coefficients against a release cadence.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Cadence {
    pub month_divisor: f64,
    pub week_divisor: f64,
}

impl Cadence {
    /// Calendar month and week.
    pub const CALENDAR: Cadence = Cadence { month_divisor: 30.0, week_divisor: 7.0 };
    /// Working days per month and week.
    pub const WORKING: Cadence = Cadence { month_divisor: 20.0, week_divisor: 5.0 };

    /// Both divisors must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.month_divisor) && ok(self.week_divisor) {
            Ok(())
        } else {
            Err(BurndownError::InvalidCadence {
                month_divisor: self.month_divisor,
                week_divisor: self.week_divisor,
            })
        }
    }
}

impl Default for Cadence {
    fn default() -> Self { Self::CALENDAR }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// When false the prediction series is empty.
    pub enabled: bool,
    pub cadence: Cadence,
    /// End the curve at `target + (target - now)` instead of `target`.
    pub overshoot: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { enabled: true, cadence: Cadence::default(), overshoot: false }
    }
}

impl PredictionConfig {
    pub fn disabled() -> Self { Self { enabled: false, ..Self::default() } }
}

/// `y(d) = -a*d^3 + b*d^2 - d + to_burn`, with `d` in elapsed days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBurn {
    pub a: f64,
    pub b: f64,
    pub to_burn: f64,
}

impl CubicBurn {
    pub const fn new(a: f64, b: f64, to_burn: f64) -> Self { Self { a, b, to_burn } }

    /// Coefficients for a window of `days` days.
    /// Contract: `days > 0`; a zero-length window yields infinite coefficients.
    pub fn calibrate(to_burn: u64, days: f64, cadence: &Cadence) -> Self {
        let t = to_burn as f64;
        let a = t / (SECONDS_PER_DAY * (days / cadence.month_divisor));
        let b = t / (SECONDS_PER_DAY / (days / cadence.week_divisor));
        Self { a, b, to_burn: t }
    }

    #[inline]
    pub fn value_at_day(&self, d: f64) -> f64 {
        -self.a * d.powi(3) + self.b * d.powi(2) - d + self.to_burn
    }

    /// One point per whole day in `0..=days`, starting at `start`. Stops before
    /// the first negative (or NaN) value and before the first day the curve
    /// rises, so the output never increases and never exceeds `to_burn`.
    pub fn points(&self, start: Timestamp, days: f64) -> Vec<(Timestamp, f64)> {
        if !days.is_finite() || days < 0.0 { return Vec::new(); }
        let last = days.floor() as u64;
        let mut out = Vec::new();
        let mut prev = f64::INFINITY;
        for d in 0..=last {
            let d = d as f64;
            let y = self.value_at_day(d);
            if y.is_nan() || y < 0.0 || y > prev { break; }
            out.push((start + days_to_ms(d), y));
            prev = y;
        }
        out
    }
}

/// Prediction curve from `start_point` (the first observation) to the
/// release target, or the overshoot-adjusted end.
pub fn predict(
    schedule: &ReleaseSchedule,
    to_burn: u64,
    start_point: Timestamp,
    now: Timestamp,
    config: &PredictionConfig,
) -> Vec<(Timestamp, f64)> {
    if !config.enabled { return Vec::new(); }

    let end = if config.overshoot {
        schedule.target + (schedule.target - now)
    } else {
        schedule.target
    };
    if let Err(err) = config.cadence.validate() {
        tracing::warn!(%err, "skipping prediction");
        return Vec::new();
    }
    let days = ms_to_days(end - start_point);
    if days.is_nan() || days <= 0.0 {
        tracing::debug!(days, "prediction window is empty");
        return Vec::new();
    }
    let curve = CubicBurn::calibrate(to_burn, days, &config.cadence);
    let points = curve.points(start_point, days);
    tracing::debug!(a = curve.a, b = curve.b, points = points.len(), "prediction computed");
    points
}
