// File: crates/burndown-core/src/normalize.rs
// Summary: Raw closed-issue records -> numeric (epoch ms, open count) samples.

use crate::error::Result;
use crate::schedule::RawDate;
use crate::types::Timestamp;

/// One observation of open issues at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosedIssuePoint {
    pub time: Timestamp,
    pub open_count: u64,
}

impl ClosedIssuePoint {
    pub const fn new(time: Timestamp, open_count: u64) -> Self {
        Self { time, open_count }
    }

    #[inline]
    pub fn as_xy(&self) -> (f64, f64) { (self.time, self.open_count as f64) }
}

/// Parse every date, keeping input order. Input is assumed chronological and
/// is not re-sorted. The first malformed date aborts the whole conversion.
pub fn normalize(raw: &[(RawDate, u64)]) -> Result<Vec<ClosedIssuePoint>> {
    raw.iter()
        .map(|(date, count)| Ok(ClosedIssuePoint::new(date.to_timestamp()?, *count)))
        .collect()
}

/// Append a synthetic `(now, last open count)` sample. Empty input stays empty.
pub fn append_now_sample(points: &[ClosedIssuePoint], now: Timestamp) -> Vec<ClosedIssuePoint> {
    let mut out = points.to_vec();
    if let Some(last) = points.last() {
        out.push(ClosedIssuePoint::new(now, last.open_count));
    }
    out
}

/// XY view of the samples, as consumed by the fitter and the chart series.
pub fn to_xy(points: &[ClosedIssuePoint]) -> Vec<(f64, f64)> {
    points.iter().map(ClosedIssuePoint::as_xy).collect()
}
