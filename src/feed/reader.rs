//! CSV readers for an extracted GTFS static feed directory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::feed::records::{Route, Stop, Trip};

/// The parsed tables of a GTFS static feed.
#[derive(Debug, Clone)]
pub struct Feed {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stops: Vec<Stop>,
}

/// Reads `routes.txt`, `trips.txt`, and `stops.txt` from a feed
/// directory.
pub fn read_feed(dir: &Path) -> Result<Feed> {
    let routes = read_routes(dir)?;
    let trips = read_trips(dir)?;
    let stops = read_stops(dir)?;
    Ok(Feed {
        routes,
        trips,
        stops,
    })
}

pub fn read_routes(dir: &Path) -> Result<Vec<Route>> {
    read_table(&dir.join("routes.txt"))
}

pub fn read_trips(dir: &Path) -> Result<Vec<Trip>> {
    read_table(&dir.join("trips.txt"))
}

pub fn read_stops(dir: &Path) -> Result<Vec<Stop>> {
    read_table(&dir.join("stops.txt"))
}

/// Deserializes every row of one GTFS CSV table. Field values are
/// trimmed; agencies are inconsistent about padding.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("opening GTFS table {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: T =
            result.with_context(|| format!("decoding GTFS row in {}", path.display()))?;
        rows.push(record);
    }

    debug!(table = %path.display(), rows = rows.len(), "GTFS table loaded");
    Ok(rows)
}
