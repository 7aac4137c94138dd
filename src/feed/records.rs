//! Raw GTFS static records, one struct per consumed table row.

use serde::Deserialize;

/// A row of `routes.txt`.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
    #[serde(default)]
    pub route_type: Option<u16>,
    #[serde(default)]
    pub route_color: Option<String>,
}

impl Route {
    /// The route short name parsed as a number, when it consists
    /// entirely of digits. BC Transit feeds use purely numeric short
    /// names for regular routes and word codes for special fares.
    pub fn numeric_short_name(&self) -> Option<u32> {
        if self.route_short_name.is_empty()
            || !self.route_short_name.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        self.route_short_name.parse().ok()
    }

    /// The feed-provided route color, ignoring empty placeholders.
    pub fn color(&self) -> Option<&str> {
        self.route_color.as_deref().filter(|c| !c.is_empty())
    }
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, Deserialize)]
pub struct Trip {
    pub route_id: String,
    #[serde(default)]
    pub service_id: String,
    pub trip_id: String,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    #[serde(default)]
    pub direction_id: Option<u8>,
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, Deserialize)]
pub struct Stop {
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: Option<String>,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub stop_lat: Option<f64>,
    #[serde(default)]
    pub stop_lon: Option<f64>,
}
