// File: crates/burndown-cli/src/lib.rs
// Summary: Load inputs, compute the burndown and render it; shared by the binary and its tests.

pub mod args;
pub mod load;

use std::path::PathBuf;

use anyhow::{Context, Result};
use burndown_core::{burndown, Burndown};
use burndown_render_skia::{RenderOptions, SkiaRenderer};

pub use args::Args;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// PNG written to this path.
    Written(PathBuf),
    /// Nothing drawn; the message to show instead.
    Placeholder(String),
}

pub fn run(args: &Args) -> Result<Outcome> {
    let options = args.burndown_options()?;
    let now = args.now()?;

    // The schedule decides whether the release exists before its data is read.
    let releases = load::load_releases(&args.data_dir)?;
    let data = if releases.contains(&args.release) {
        load::load_burndown(&args.data_dir, &args.release)?
    } else {
        None
    };

    let result = burndown(&args.release, &releases, data.as_ref(), now, &options)
        .with_context(|| format!("computing burndown for {}", args.release))?;

    match result {
        Burndown::Placeholder(p) => {
            tracing::warn!(release = %args.release, "{p}");
            Ok(Outcome::Placeholder(p.message()))
        }
        Burndown::Chart(chart) => {
            let out = args.output_path();
            let opts = RenderOptions { width: args.width, height: args.height, ..RenderOptions::default() };
            SkiaRenderer::new(opts)
                .render_to_png(&chart, &out)
                .with_context(|| format!("writing {}", out.display()))?;
            tracing::info!(path = %out.display(), series = chart.series.len(), "wrote burndown chart");
            Ok(Outcome::Written(out))
        }
    }
}
