// File: crates/burndown-core/src/error.rs
// Summary: Typed errors for date parsing and line fitting.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BurndownError {
    /// A schedule or sample date could not be parsed.
    #[error("malformed date {input:?}")]
    MalformedDate { input: String },
    /// A numeric date that is not a finite epoch-millisecond value.
    #[error("timestamp {0} is not finite")]
    NonFiniteTimestamp(f64),
    /// Prediction cadence divisors must be finite and positive.
    #[error("invalid prediction cadence (month divisor {month_divisor}, week divisor {week_divisor})")]
    InvalidCadence { month_divisor: f64, week_divisor: f64 },
}

/// Degenerate inputs for the least-squares fit. Callers recover from these
/// locally by omitting the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("at least two samples are required, got {0}")]
    TooFewPoints(usize),
    #[error("all samples share the same timestamp")]
    DegenerateTimes,
    #[error("fitted line is flat and never reaches zero")]
    ZeroSlope,
}

pub type Result<T, E = BurndownError> = std::result::Result<T, E>;
