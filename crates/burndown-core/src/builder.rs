// File: crates/burndown-core/src/builder.rs
// Summary: Assemble Ideal, Trend, Prediction and Reality series from one data snapshot.
// Notes:
// - The three historical variants of the burndown page are options here:
//   trend endpoint, "now" sample augmentation, and the cubic prediction.

use serde::Deserialize;

use crate::error::Result;
use crate::fit::LinearFit;
use crate::normalize::{append_now_sample, to_xy, ClosedIssuePoint};
use crate::predict::{predict, PredictionConfig};
use crate::schedule::ReleaseSchedule;
use crate::series::{ChartSeries, SeriesKind, StepMode};
use crate::types::Timestamp;

/// Where the trend line ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendEndpoint {
    /// `(target, fit(target))`.
    #[default]
    Target,
    /// `(zero crossing, 0)`.
    ZeroCrossing,
}

/// Options controlling series construction.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BurndownOptions {
    pub trend_endpoint: TrendEndpoint,
    /// Fit the trend with an extra `(now, last open count)` sample.
    pub augment_with_now: bool,
    pub prediction: PredictionConfig,
    /// Trend series starts hidden unless set.
    pub show_trend: bool,
}

impl BurndownOptions {
    /// Reject settings that would silently disable a series.
    pub fn validate(&self) -> Result<()> {
        self.prediction.cadence.validate()
    }
}

impl Default for BurndownOptions {
    fn default() -> Self {
        Self {
            trend_endpoint: TrendEndpoint::Target,
            augment_with_now: false,
            prediction: PredictionConfig::default(),
            show_trend: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurndownSeries {
    pub ideal: ChartSeries,
    pub trend: ChartSeries,
    pub prediction: ChartSeries,
    pub reality: ChartSeries,
}

impl BurndownSeries {
    /// Series in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        [&self.ideal, &self.trend, &self.prediction, &self.reality].into_iter()
    }

    pub fn into_vec(self) -> Vec<ChartSeries> {
        vec![self.ideal, self.trend, self.prediction, self.reality]
    }
}

/// Straight reference line from `(start, to_burn)` to `(target, 0)`.
pub fn ideal_points(schedule: &ReleaseSchedule, to_burn: u64) -> Vec<(Timestamp, f64)> {
    vec![(schedule.start, to_burn as f64), (schedule.target, 0.0)]
}

/// Two-point trend line from the first observation. Empty when the fit is
/// degenerate.
pub fn trend_points(
    schedule: &ReleaseSchedule,
    closed: &[ClosedIssuePoint],
    now: Timestamp,
    options: &BurndownOptions,
) -> Vec<(Timestamp, f64)> {
    let Some(first) = closed.first() else { return Vec::new() };

    let samples = if options.augment_with_now {
        to_xy(&append_now_sample(closed, now))
    } else {
        to_xy(closed)
    };
    let fit = match LinearFit::fit(&samples) {
        Ok(fit) => fit,
        Err(err) => {
            tracing::debug!(%err, "omitting trend series");
            return Vec::new();
        }
    };

    let head = (first.time, fit.value_at(first.time));
    match options.trend_endpoint {
        TrendEndpoint::Target => vec![head, (schedule.target, fit.value_at(schedule.target))],
        TrendEndpoint::ZeroCrossing => match fit.zero_crossing() {
            Ok(t) => vec![head, (t, 0.0)],
            Err(err) => {
                tracing::debug!(%err, "omitting trend series");
                Vec::new()
            }
        },
    }
}

/// Build all four series.
/// Contract: `closed` is non-empty and time-ordered.
pub fn build(
    schedule: &ReleaseSchedule,
    to_burn: u64,
    closed: &[ClosedIssuePoint],
    now: Timestamp,
    options: &BurndownOptions,
) -> BurndownSeries {
    let ideal = ChartSeries::new(SeriesKind::Ideal, ideal_points(schedule, to_burn));

    let trend = ChartSeries::new(SeriesKind::Trend, trend_points(schedule, closed, now, options))
        .with_visible(options.show_trend);

    let prediction_points = match closed.first() {
        Some(first) => predict(schedule, to_burn, first.time, now, &options.prediction),
        None => Vec::new(),
    };
    let prediction = ChartSeries::new(SeriesKind::Prediction, prediction_points);

    let reality = ChartSeries::new(SeriesKind::Reality, to_xy(closed)).with_step(StepMode::Left);

    BurndownSeries { ideal, trend, prediction, reality }
}
