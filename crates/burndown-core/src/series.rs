// File: crates/burndown-core/src/series.rs
// Summary: Named chart series (Ideal, Trend, Prediction, Reality) handed to the renderer.

use crate::types::Timestamp;

/// The four series of a burndown chart, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Ideal,
    Trend,
    Prediction,
    Reality,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::Ideal,
        SeriesKind::Trend,
        SeriesKind::Prediction,
        SeriesKind::Reality,
    ];

    /// Legend name.
    pub fn name(&self) -> &'static str {
        match self {
            SeriesKind::Ideal => "Ideal World",
            SeriesKind::Trend => "Linear Regression",
            SeriesKind::Prediction => "Prediction",
            SeriesKind::Reality => "Reality",
        }
    }
}

/// How the renderer connects consecutive points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMode {
    /// Straight segments between points.
    Linear,
    /// Value holds until the next sample and changes at that sample's time.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub name: String,
    pub points: Vec<(Timestamp, f64)>,
    pub step: StepMode,
    pub visible: bool,
}

impl ChartSeries {
    pub fn new(kind: SeriesKind, points: Vec<(Timestamp, f64)>) -> Self {
        Self { kind, name: kind.name().to_string(), points, step: StepMode::Linear, visible: true }
    }

    pub fn with_step(mut self, step: StepMode) -> Self {
        self.step = step;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn len(&self) -> usize { self.points.len() }

    /// Value shown at `t` for a left-step series: the most recent sample at or
    /// before `t`. `None` before the first sample. Points must be time-ordered.
    pub fn step_value_at(&self, t: Timestamp) -> Option<f64> {
        let idx = self.points.partition_point(|&(x, _)| x <= t);
        if idx == 0 { None } else { Some(self.points[idx - 1].1) }
    }

    /// Polyline vertices as drawn. Left steps insert a horizontal run before
    /// every change.
    pub fn polyline(&self) -> Vec<(Timestamp, f64)> {
        match self.step {
            StepMode::Linear => self.points.clone(),
            StepMode::Left => {
                let mut out = Vec::with_capacity(self.points.len() * 2);
                for (i, &(x, y)) in self.points.iter().enumerate() {
                    if i > 0 {
                        let (_, prev_y) = self.points[i - 1];
                        out.push((x, prev_y));
                    }
                    out.push((x, y));
                }
                out
            }
        }
    }

    /// (min, max) over point values, `None` when empty.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        range_of(self.points.iter().map(|&(_, y)| y))
    }

    /// (min, max) over point times, `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        range_of(self.points.iter().map(|&(x, _)| x))
    }
}

fn range_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
