// File: crates/burndown-core/src/schedule.rs
// Summary: Release schedule and burndown input documents, plus date parsing.
// Notes:
// - Both documents deserialize straight from the JSON files the release
//   tooling publishes (`releases.json`, `burndown-<release>.json`).
// - Dates stay raw until a release is actually drawn, so a malformed entry
//   for some other release never blocks rendering.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{BurndownError, Result};
use crate::types::Timestamp;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A date as it appears in the input documents: either epoch milliseconds or
/// a date string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Millis(f64),
    Text(String),
}

impl RawDate {
    pub fn to_timestamp(&self) -> Result<Timestamp> {
        match self {
            RawDate::Millis(ms) if ms.is_finite() => Ok(*ms),
            RawDate::Millis(ms) => Err(BurndownError::NonFiniteTimestamp(*ms)),
            RawDate::Text(s) => parse_date(s),
        }
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self { RawDate::Text(s.to_string()) }
}

impl From<f64> for RawDate {
    fn from(ms: f64) -> Self { RawDate::Millis(ms) }
}

/// Parse a date string into epoch milliseconds.
///
/// Accepted: RFC 3339 with offset, naive `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]`
/// (read as UTC) and bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_date(input: &str) -> Result<Timestamp> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis() as f64);
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc().timestamp_millis() as f64);
        }
    }
    if let Some(ndt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(ndt.and_utc().timestamp_millis() as f64);
    }
    Err(BurndownError::MalformedDate { input: input.to_string() })
}

/// Dates of one release exactly as listed in `releases.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawReleaseDates {
    pub start: RawDate,
    pub rcs: RawDate,
    pub target: RawDate,
}

/// Parsed release schedule.
/// Contract: expected `start <= rcs_freeze <= target`; not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseSchedule {
    pub start: Timestamp,
    pub rcs_freeze: Timestamp,
    pub target: Timestamp,
}

impl ReleaseSchedule {
    pub const fn new(start: Timestamp, rcs_freeze: Timestamp, target: Timestamp) -> Self {
        Self { start, rcs_freeze, target }
    }

    pub fn from_raw(raw: &RawReleaseDates) -> Result<Self> {
        Ok(Self {
            start: raw.start.to_timestamp()?,
            rcs_freeze: raw.rcs.to_timestamp()?,
            target: raw.target.to_timestamp()?,
        })
    }
}

/// Release name -> schedule, the shape of `releases.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ReleaseScheduleMap {
    releases: BTreeMap<String, RawReleaseDates>,
}

impl ReleaseScheduleMap {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, release: impl Into<String>, dates: RawReleaseDates) {
        self.releases.insert(release.into(), dates);
    }

    pub fn contains(&self, release: &str) -> bool { self.releases.contains_key(release) }

    pub fn release_names(&self) -> impl Iterator<Item = &str> {
        self.releases.keys().map(String::as_str)
    }

    /// Parse the schedule of `release`. `Ok(None)` when the release is unknown.
    pub fn lookup(&self, release: &str) -> Result<Option<ReleaseSchedule>> {
        self.releases.get(release).map(ReleaseSchedule::from_raw).transpose()
    }
}

/// Contents of `burndown-<release>.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BurndownData {
    pub to_burn: u64,
    /// Ordered (date, open count) observations; may be missing.
    #[serde(default)]
    pub closed: Vec<(RawDate, u64)>,
}

impl BurndownData {
    pub fn has_samples(&self) -> bool { !self.closed.is_empty() }
}
