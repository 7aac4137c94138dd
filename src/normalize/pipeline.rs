//! The per-feed normalization pass.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, warn};

use crate::agency::AgencyNormalizer;
use crate::error::NormalizeError;
use crate::feed::reader::Feed;
use crate::feed::records::Route;
use crate::normalize::directions::derive_raw_directions;
use crate::normalize::types::{
    DirectionHeadsign, NormalizedFeed, NormalizedRoute, NormalizedStop, NormalizedTrip, RunSummary,
};

/// Normalizes a parsed feed with one agency profile.
///
/// # Errors
///
/// Returns a fatal [`NormalizeError`] when a kept numeric route has no
/// entry in the agency color table.
pub fn normalize_feed<A: AgencyNormalizer>(
    agency: &A,
    feed: &Feed,
) -> Result<NormalizedFeed, NormalizeError> {
    let mut routes = Vec::new();
    let mut excluded = 0usize;
    let mut kept_ids: HashSet<&str> = HashSet::new();
    let mut resolved_by_route: HashMap<String, Option<i64>> = HashMap::new();

    for route in &feed.routes {
        if agency.should_exclude(route) {
            excluded += 1;
            debug!(
                route_id = %route.route_id,
                short_name = %route.route_short_name,
                "Route excluded"
            );
            continue;
        }
        kept_ids.insert(route.route_id.as_str());

        if let Some(route_type) = route.route_type {
            if route_type != agency.route_type() {
                warn!(
                    route_id = %route.route_id,
                    route_type,
                    "Unexpected route type for this agency"
                );
            }
        }

        let resolved_id = resolve_route_id(agency, route);
        let cleaned_id = agency.clean_route_id(&route.route_id);
        resolved_by_route.insert(cleaned_id.clone(), resolved_id);

        let color = match route.color() {
            Some(feed_color) => feed_color.to_string(),
            None if route.numeric_short_name().is_some() => agency.route_color(route)?,
            None => agency.agency_color().to_string(),
        };

        routes.push(NormalizedRoute {
            route_id: cleaned_id,
            resolved_id,
            short_name: route.route_short_name.clone(),
            long_name: agency.clean_route_long_name(&route.route_long_name),
            color,
        });
    }

    let kept_trips: Vec<_> = feed
        .trips
        .iter()
        .filter(|t| kept_ids.contains(t.route_id.as_str()))
        .cloned()
        .collect();

    let trips: Vec<NormalizedTrip> = kept_trips
        .iter()
        .map(|trip| NormalizedTrip {
            trip_id: trip.trip_id.clone(),
            route_id: agency.clean_route_id(&trip.route_id),
            direction_id: trip.direction_id,
            headsign: agency.clean_trip_headsign(trip.trip_headsign.as_deref().unwrap_or("")),
        })
        .collect();

    let directions: Vec<DirectionHeadsign> = derive_raw_directions(&kept_trips)
        .into_iter()
        .map(|raw| DirectionHeadsign {
            route_id: agency.clean_route_id(&raw.route_id),
            direction_id: raw.direction_id,
            headsign: agency.clean_direction_headsign(raw.direction_id, false, &raw.headsign),
        })
        .collect();

    warn_on_non_descriptive_directions(agency, &directions, &resolved_by_route);

    let stops: Vec<NormalizedStop> = feed
        .stops
        .iter()
        .map(|stop| NormalizedStop {
            stop_id: stop.stop_id.clone(),
            stop_code: stop.stop_code.clone(),
            stop_name: agency.clean_stop_name(&stop.stop_name),
        })
        .collect();

    let summary = RunSummary {
        agency: agency.agency_name().to_string(),
        agency_color: agency.agency_color().to_string(),
        generated_at: Utc::now(),
        routes_total: feed.routes.len(),
        routes_excluded: excluded,
        routes_kept: routes.len(),
        trips: trips.len(),
        stops: stops.len(),
        directions: directions.len(),
    };

    Ok(NormalizedFeed {
        routes,
        trips,
        stops,
        directions,
        summary,
    })
}

/// Default identifier resolution: numeric short name, then the
/// agency's override table, then the cleaned route id when numeric.
pub fn resolve_route_id<A: AgencyNormalizer>(agency: &A, route: &Route) -> Option<i64> {
    if let Some(rsn) = route.numeric_short_name() {
        return Some(i64::from(rsn));
    }
    if let Some(id) = agency.resolve_id(&route.route_short_name) {
        return Some(id);
    }
    let cleaned = agency.clean_route_id(&route.route_id);
    if let Ok(id) = cleaned.parse::<i64>() {
        return Some(id);
    }
    warn!(
        route_id = %route.route_id,
        short_name = %route.route_short_name,
        "No resolvable numeric id for route"
    );
    None
}

/// A route whose directions collapse to the same or empty text after
/// cleaning is no longer descriptive for riders; warn unless the
/// agency allows it for that route.
fn warn_on_non_descriptive_directions<A: AgencyNormalizer>(
    agency: &A,
    directions: &[DirectionHeadsign],
    resolved_by_route: &HashMap<String, Option<i64>>,
) {
    let mut by_route: HashMap<&str, Vec<&DirectionHeadsign>> = HashMap::new();
    for dir in directions {
        by_route.entry(dir.route_id.as_str()).or_default().push(dir);
    }

    for (route_id, dirs) in by_route {
        if dirs.len() < 2 {
            continue;
        }
        let mut headsigns: Vec<&str> = dirs.iter().map(|d| d.headsign.as_str()).collect();
        headsigns.sort_unstable();
        headsigns.dedup();
        let descriptive = headsigns.len() == dirs.len() && !headsigns.contains(&"");
        if descriptive {
            continue;
        }

        let allowed = resolved_by_route
            .get(route_id)
            .copied()
            .flatten()
            .is_some_and(|id| agency.allow_non_descriptive_headsigns(id));
        if !allowed {
            warn!(route_id, "Direction headsigns are not descriptive");
        }
    }
}
