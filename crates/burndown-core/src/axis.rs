// File: crates/burndown-core/src/axis.rs
// Summary: Axis model with labels, ranges and date annotations.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    /// Values are epoch milliseconds.
    DateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: AxisKind::Linear }
    }

    pub fn datetime(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: AxisKind::DateTime }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotLineKind {
    Target,
    Now,
}

impl PlotLineKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlotLineKind::Target => "Target",
            PlotLineKind::Now => "Now",
        }
    }
}

/// Vertical marker at a single x value (target date, "now").
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLine {
    pub kind: PlotLineKind,
    pub label: String,
    pub value: f64,
}

impl PlotLine {
    pub fn new(kind: PlotLineKind, value: f64) -> Self {
        Self { kind, label: kind.label().to_string(), value }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Shaded x interval (e.g. the release-candidate period).
#[derive(Clone, Debug, PartialEq)]
pub struct PlotBand {
    pub label: String,
    pub from: f64,
    pub to: f64,
}

impl PlotBand {
    pub fn new(label: impl Into<String>, from: f64, to: f64) -> Self {
        Self { label: label.into(), from, to }
    }
}
