//! Artifact filenames: `page_<timestamp>.html`.

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

const PREFIX: &str = "page_";
const EXTENSION: &str = "html";

/// Renders `now` as an ISO-8601 UTC timestamp with millisecond precision and
/// replaces `:` and `.` with `-`, e.g. `2026-10-19T08-05-03-042Z`.
///
/// The fixed-width form sorts lexically in time order.
pub fn timestamp_token(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

pub fn artifact_filename(now: DateTime<Utc>) -> String {
    format!("{}{}.{}", PREFIX, timestamp_token(now), EXTENSION)
}

/// Destination path for an artifact generated at `now`.
pub fn artifact_path(output_dir: &Path, now: DateTime<Utc>) -> PathBuf {
    output_dir.join(artifact_filename(now))
}
