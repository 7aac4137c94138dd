//! Domain errors for feed normalization.

use thiserror::Error;

/// Fatal configuration errors raised while normalizing a feed.
///
/// Every valid route is required to have a known brand color, so a
/// color table miss is a configuration bug to fix, not a condition to
/// recover from. These propagate up to the binary, which exits with
/// the diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("no color assigned for route {short_name} (route_id {route_id})")]
    MissingRouteColor { route_id: String, short_name: String },

    #[error("route {route_id} short name {short_name:?} is not numeric; cannot resolve a color")]
    NonNumericShortName { route_id: String, short_name: String },
}
