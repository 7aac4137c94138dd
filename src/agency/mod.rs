//! Per-agency normalization profiles.
//!
//! Each supported agency implements [`AgencyNormalizer`]: route
//! filtering, identifier resolution, color resolution, and the label
//! cleaning chains for its feed's conventions. The orchestrator in
//! [`crate::normalize`] is generic over the trait, so an agency is
//! plugged in at construction rather than baked into the pipeline.

pub mod cfv;

pub use cfv::CentralFraserValley;

use crate::error::NormalizeError;
use crate::feed::records::Route;

/// Route type code for bus service in GTFS `routes.txt`.
pub const ROUTE_TYPE_BUS: u16 = 3;

/// One transit agency's normalization rules.
///
/// Implementations hold only immutable tables and compiled patterns;
/// every method is a pure function of its inputs.
pub trait AgencyNormalizer {
    /// Rider-facing agency display name.
    fn agency_name(&self) -> &'static str;

    /// Agency-wide brand color, used when no per-route color applies.
    fn agency_color(&self) -> &'static str;

    /// GTFS route type this agency's routes are expected to carry.
    fn route_type(&self) -> u16 {
        ROUTE_TYPE_BUS
    }

    /// Whether a route is covered by a different application and must
    /// be dropped from this agency's output.
    fn should_exclude(&self, _route: &Route) -> bool {
        false
    }

    /// Maps a non-numeric route short name to its pre-assigned stable
    /// numeric identifier. `None` falls back to the default resolution
    /// strategy in the orchestrator.
    fn resolve_id(&self, _short_name: &str) -> Option<i64> {
        None
    }

    /// Strips feed-variant qualifiers from a raw route identifier.
    fn clean_route_id(&self, route_id: &str) -> String {
        route_id.to_string()
    }

    /// Brand color for a route with a numeric short name and no
    /// feed-provided color. A short name missing from the agency's
    /// color table is a fatal configuration error.
    fn route_color(&self, route: &Route) -> Result<String, NormalizeError>;

    fn clean_route_long_name(&self, long_name: &str) -> String;

    fn clean_direction_headsign(
        &self,
        direction_id: Option<u8>,
        from_stop_name: bool,
        headsign: &str,
    ) -> String;

    fn clean_trip_headsign(&self, headsign: &str) -> String;

    fn clean_stop_name(&self, stop_name: &str) -> String;

    /// Routes allowed to end up with identical or empty direction
    /// headsigns without a warning.
    fn allow_non_descriptive_headsigns(&self, _route_id: i64) -> bool {
        false
    }
}
