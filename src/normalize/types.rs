//! Normalized output records and the per-run summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A kept route after exclusion, id/color resolution, and long name
/// cleanup.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRoute {
    pub route_id: String,
    pub resolved_id: Option<i64>,
    pub short_name: String,
    pub long_name: String,
    /// 6 hex digits, no leading symbol.
    pub color: String,
}

/// A trip of a kept route with its cleaned headsign.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedTrip {
    pub trip_id: String,
    pub route_id: String,
    pub direction_id: Option<u8>,
    pub headsign: String,
}

/// A stop with its cleaned display name.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedStop {
    pub stop_id: String,
    pub stop_code: Option<String>,
    pub stop_name: String,
}

/// The derived, cleaned headsign for one direction of a route.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionHeadsign {
    pub route_id: String,
    pub direction_id: Option<u8>,
    pub headsign: String,
}

/// Counts and metadata for one normalization run, written alongside
/// the record files.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub agency: String,
    pub agency_color: String,
    pub generated_at: DateTime<Utc>,
    pub routes_total: usize,
    pub routes_excluded: usize,
    pub routes_kept: usize,
    pub trips: usize,
    pub stops: usize,
    pub directions: usize,
}

/// Everything one normalization run produces.
#[derive(Debug, Clone)]
pub struct NormalizedFeed {
    pub routes: Vec<NormalizedRoute>,
    pub trips: Vec<NormalizedTrip>,
    pub stops: Vec<NormalizedStop>,
    pub directions: Vec<DirectionHeadsign>,
    pub summary: RunSummary,
}
