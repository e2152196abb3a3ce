// File: crates/burndown-core/src/chart.rs
// Summary: Burndown entry point; release lookup, no-data handling and chart assembly.

use crate::axis::{Axis, PlotBand, PlotLine, PlotLineKind};
use crate::builder::{build, BurndownOptions};
use crate::error::Result;
use crate::normalize::normalize;
use crate::schedule::{BurndownData, ReleaseSchedule, ReleaseScheduleMap};
use crate::series::{ChartSeries, SeriesKind};
use crate::types::Timestamp;

pub const X_AXIS_LABEL: &str = "Date";
pub const Y_AXIS_LABEL: &str = "Open Issues & Pull Requests";

/// Renderer-ready burndown chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BurndownChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub plot_lines: Vec<PlotLine>,
    pub plot_bands: Vec<PlotBand>,
    /// Ideal, Trend, Prediction, Reality.
    pub series: Vec<ChartSeries>,
}

impl BurndownChart {
    pub fn series(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

/// Why no chart could be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placeholder {
    UnknownRelease(String),
    NoData(String),
}

impl Placeholder {
    pub fn release(&self) -> &str {
        match self {
            Placeholder::UnknownRelease(r) | Placeholder::NoData(r) => r,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Placeholder::UnknownRelease(r) => format!("Cannot draw burndown, no dates for {r}!"),
            Placeholder::NoData(r) => format!("No burndown data yet for {r}."),
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Burndown {
    Chart(BurndownChart),
    Placeholder(Placeholder),
}

impl Burndown {
    pub fn chart(&self) -> Option<&BurndownChart> {
        match self {
            Burndown::Chart(c) => Some(c),
            Burndown::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            Burndown::Chart(_) => None,
            Burndown::Placeholder(p) => Some(p),
        }
    }
}

/// Compute the burndown chart for `release`.
///
/// Both inputs must already be loaded. Unknown releases and missing samples
/// are reported as placeholders; malformed dates and invalid options are
/// errors.
pub fn burndown(
    release: &str,
    releases: &ReleaseScheduleMap,
    data: Option<&BurndownData>,
    now: Timestamp,
    options: &BurndownOptions,
) -> Result<Burndown> {
    options.validate()?;
    let Some(schedule) = releases.lookup(release)? else {
        tracing::debug!(release, "release not in schedule");
        return Ok(Burndown::Placeholder(Placeholder::UnknownRelease(release.to_string())));
    };
    let Some(data) = data.filter(|d| d.has_samples()) else {
        tracing::debug!(release, "no closed-issue samples");
        return Ok(Burndown::Placeholder(Placeholder::NoData(release.to_string())));
    };

    let closed = normalize(&data.closed)?;
    let series = build(&schedule, data.to_burn, &closed, now, options).into_vec();
    let (x_axis, y_axis) = axes_for(&schedule, &series);

    Ok(Burndown::Chart(BurndownChart {
        title: format!("Progress toward {release} release"),
        x_axis,
        y_axis,
        plot_lines: vec![
            PlotLine::new(PlotLineKind::Target, schedule.target),
            PlotLine::new(PlotLineKind::Now, now),
        ],
        plot_bands: vec![PlotBand::new("RCs", schedule.rcs_freeze, schedule.target)],
        series,
    }))
}

/// X spans every visible series point plus the target; Y runs from 0 to the largest
/// value with a 2% margin.
fn axes_for(schedule: &ReleaseSchedule, series: &[ChartSeries]) -> (Axis, Axis) {
    let mut x_min = schedule.target;
    let mut x_max = schedule.target;
    let mut y_max = 0.0f64;
    // Hidden series do not stretch the axes.
    for s in series.iter().filter(|s| s.visible) {
        if let Some((lo, hi)) = s.x_range() {
            x_min = x_min.min(lo);
            x_max = x_max.max(hi);
        }
        if let Some((_, hi)) = s.y_range() {
            y_max = y_max.max(hi);
        }
    }
    if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
    let y_max = (y_max * 1.02).max(1.0);
    (Axis::datetime(X_AXIS_LABEL, x_min, x_max), Axis::new(Y_AXIS_LABEL, 0.0, y_max))
}
