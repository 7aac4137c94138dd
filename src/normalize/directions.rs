//! Direction headsign derivation.
//!
//! GTFS static feeds carry headsigns per trip, not per direction. The
//! direction headsign for (route, direction) is the most frequent
//! non-empty raw trip headsign, ties broken by first appearance.

use std::collections::BTreeMap;

use crate::feed::records::Trip;

/// One derived raw direction headsign, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDirection {
    pub route_id: String,
    pub direction_id: Option<u8>,
    pub headsign: String,
}

pub(crate) fn derive_raw_directions(trips: &[Trip]) -> Vec<RawDirection> {
    // headsign → (count, first-seen index), keyed per (route, direction)
    let mut groups: BTreeMap<(String, Option<u8>), Vec<(String, usize)>> = BTreeMap::new();

    for trip in trips {
        let Some(headsign) = trip.trip_headsign.as_deref().filter(|h| !h.is_empty()) else {
            continue;
        };
        let key = (trip.route_id.clone(), trip.direction_id);
        let seen = groups.entry(key).or_default();
        match seen.iter_mut().find(|(h, _)| h == headsign) {
            Some((_, count)) => *count += 1,
            None => seen.push((headsign.to_string(), 1)),
        }
    }

    groups
        .into_iter()
        .filter_map(|((route_id, direction_id), seen)| {
            // strictly-greater keeps the first-seen headsign on ties
            let best = seen
                .iter()
                .fold(None::<&(String, usize)>, |best, entry| match best {
                    Some(b) if b.1 >= entry.1 => Some(b),
                    _ => Some(entry),
                })?;
            Some(RawDirection {
                route_id,
                direction_id,
                headsign: best.0.clone(),
            })
        })
        .collect()
}
