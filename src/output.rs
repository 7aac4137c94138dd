//! Output formatting and persistence for normalized feeds.
//!
//! One CSV per record kind plus a JSON run summary, written into the
//! output directory.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::normalize::types::NormalizedFeed;

/// Writes a normalized feed into `dir`: `routes.csv`, `trips.csv`,
/// `stops.csv`, `directions.csv`, and `summary.json`.
///
/// Creates the directory if it does not already exist.
pub fn write_normalized(dir: &Path, normalized: &NormalizedFeed) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    write_csv(&dir.join("routes.csv"), &normalized.routes)?;
    write_csv(&dir.join("trips.csv"), &normalized.trips)?;
    write_csv(&dir.join("stops.csv"), &normalized.stops)?;
    write_csv(&dir.join("directions.csv"), &normalized.directions)?;

    let summary_path = dir.join("summary.json");
    let json = serde_json::to_string_pretty(&normalized.summary)?;
    fs::write(&summary_path, json)
        .with_context(|| format!("writing {}", summary_path.display()))?;

    info!(dir = %dir.display(), "Normalized feed written");
    Ok(())
}

/// Serializes records as one CSV file with a header row.
fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = records.len(), "Writing CSV");

    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
