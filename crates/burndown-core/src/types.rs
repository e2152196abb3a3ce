// File: crates/burndown-core/src/types.rs
// Summary: Shared time units and calibration constants.

/// Epoch milliseconds (UTC). Fractional values are allowed.
pub type Timestamp = f64;

pub const MS_PER_SECOND: f64 = 1000.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MS_PER_DAY: f64 = SECONDS_PER_DAY * MS_PER_SECOND;

/// Convert a span in milliseconds to (fractional) days.
#[inline]
pub fn ms_to_days(ms: f64) -> f64 { ms / MS_PER_DAY }

/// Convert (fractional) days to milliseconds.
#[inline]
pub fn days_to_ms(days: f64) -> f64 { days * MS_PER_DAY }
