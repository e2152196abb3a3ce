// File: crates/burndown-core/src/lib.rs
// Summary: Release burndown computation; trend fitting, prediction and series assembly.

pub mod axis;
pub mod builder;
pub mod chart;
pub mod error;
pub mod fit;
pub mod normalize;
pub mod predict;
pub mod schedule;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisKind, PlotBand, PlotLine, PlotLineKind};
pub use builder::{build, BurndownOptions, BurndownSeries, TrendEndpoint};
pub use chart::{burndown, Burndown, BurndownChart, Placeholder};
pub use error::{BurndownError, FitError};
pub use fit::LinearFit;
pub use normalize::{append_now_sample, normalize, ClosedIssuePoint};
pub use predict::{predict, Cadence, CubicBurn, PredictionConfig};
pub use schedule::{parse_date, BurndownData, RawDate, RawReleaseDates, ReleaseSchedule, ReleaseScheduleMap};
pub use series::{ChartSeries, SeriesKind, StepMode};
pub use types::{Timestamp, MS_PER_DAY, MS_PER_SECOND, SECONDS_PER_DAY};
