//! Feed normalization orchestration.
//!
//! Runs one [`crate::agency::AgencyNormalizer`] over a parsed feed:
//! route exclusion, identifier and color resolution, label cleaning for
//! routes/trips/stops, and direction headsign derivation. Produces the
//! normalized records consumed by the output writer.

mod directions;
pub mod pipeline;
pub mod types;

pub use pipeline::{normalize_feed, resolve_route_id};
pub use types::{
    DirectionHeadsign, NormalizedFeed, NormalizedRoute, NormalizedStop, NormalizedTrip, RunSummary,
};
