// File: crates/burndown-cli/src/args.rs
// Summary: Command-line flags and their mapping onto `BurndownOptions`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use burndown_core::{BurndownOptions, Cadence, Timestamp, TrendEndpoint};
use clap::{Parser, ValueEnum};

use crate::load::sanitize_release;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EndpointArg {
    Target,
    ZeroCrossing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PredictionArg {
    Off,
    Calendar,
    Working,
}

#[derive(Debug, Parser)]
#[command(name = "burndown", version, about = "Render the burndown chart of a release")]
pub struct Args {
    /// Release name as listed in releases.json.
    pub release: String,

    /// Directory holding releases.json and burndown-<release>.json.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Output PNG (default: target/out/burndown_<release>.png).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON file with burndown options; flags below override it.
    #[arg(long)]
    pub options: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub trend_endpoint: Option<EndpointArg>,

    /// Fit the trend with an extra sample at "now".
    #[arg(long)]
    pub augment_now: bool,

    #[arg(long, value_enum)]
    pub prediction: Option<PredictionArg>,

    /// Stretch the prediction past the target by however late we are.
    #[arg(long)]
    pub overshoot: bool,

    /// Draw the linear regression line (hidden by default).
    #[arg(long)]
    pub show_trend: bool,

    /// Override the current time (any date format accepted in the data files).
    #[arg(long)]
    pub now: Option<String>,

    #[arg(long, default_value_t = 1024)]
    pub width: i32,

    #[arg(long, default_value_t = 640)]
    pub height: i32,
}

impl Args {
    /// Options file (if any) with command-line overrides applied.
    pub fn burndown_options(&self) -> Result<BurndownOptions> {
        let mut opts = match &self.options {
            Some(path) => load_options(path)?,
            None => BurndownOptions::default(),
        };
        if let Some(endpoint) = self.trend_endpoint {
            opts.trend_endpoint = match endpoint {
                EndpointArg::Target => TrendEndpoint::Target,
                EndpointArg::ZeroCrossing => TrendEndpoint::ZeroCrossing,
            };
        }
        match self.prediction {
            Some(PredictionArg::Off) => opts.prediction.enabled = false,
            Some(PredictionArg::Calendar) => {
                opts.prediction.enabled = true;
                opts.prediction.cadence = Cadence::CALENDAR;
            }
            Some(PredictionArg::Working) => {
                opts.prediction.enabled = true;
                opts.prediction.cadence = Cadence::WORKING;
            }
            None => {}
        }
        opts.augment_with_now |= self.augment_now;
        opts.prediction.overshoot |= self.overshoot;
        opts.show_trend |= self.show_trend;
        Ok(opts)
    }

    pub fn now(&self) -> Result<Timestamp> {
        match &self.now {
            Some(s) => burndown_core::parse_date(s).with_context(|| format!("invalid --now value '{s}'")),
            None => Ok(chrono::Utc::now().timestamp_millis() as f64),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| default_output(&self.release))
    }
}

fn load_options(path: &Path) -> Result<BurndownOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading options {}", path.display()))?;
    let opts: BurndownOptions = serde_json::from_str(&text)
        .with_context(|| format!("parsing options {}", path.display()))?;
    opts.validate().with_context(|| format!("checking options {}", path.display()))?;
    Ok(opts)
}

/// target/out/burndown_<release>.png, with path separators in the release name replaced.
fn default_output(release: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("burndown_{}.png", sanitize_release(release)))
}
