// File: crates/burndown-cli/src/load.rs
// Summary: Read the release schedule and per-release burndown documents from disk.

use std::path::Path;

use anyhow::{Context, Result};
use burndown_core::{BurndownData, ReleaseScheduleMap};

pub const RELEASES_FILE: &str = "releases.json";

/// Release name reduced to `[A-Za-z0-9._-]` so it can never name a path
/// outside the data directory.
pub fn sanitize_release(release: &str) -> String {
    release
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

pub fn burndown_file_name(release: &str) -> String {
    format!("burndown-{}.json", sanitize_release(release))
}

pub fn load_releases(data_dir: &Path) -> Result<ReleaseScheduleMap> {
    let path = data_dir.join(RELEASES_FILE);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let map: ReleaseScheduleMap = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(releases = map.release_names().count(), "loaded release schedule");
    Ok(map)
}

/// `Ok(None)` when the release has no burndown file yet.
pub fn load_burndown(data_dir: &Path, release: &str) -> Result<Option<BurndownData>> {
    let path = data_dir.join(burndown_file_name(release));
    if !path.exists() {
        tracing::info!(path = %path.display(), "no burndown data file");
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let data: BurndownData = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(samples = data.closed.len(), to_burn = data.to_burn, "loaded burndown data");
    Ok(Some(data))
}
