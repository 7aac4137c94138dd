//! End-to-end test over a small fixture feed: read → normalize → write.

use std::fs;
use std::path::Path;

use gtfs_name_normalizer::agency::CentralFraserValley;
use gtfs_name_normalizer::feed::read_feed;
use gtfs_name_normalizer::normalize::normalize_feed;
use gtfs_name_normalizer::output::write_normalized;

fn fixture_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[test]
fn test_full_pipeline() {
    let feed = read_feed(fixture_dir()).expect("Failed to read fixture feed");
    let normalized = normalize_feed(&CentralFraserValley, &feed).expect("Failed to normalize");

    // 55 (Chilliwack range) and the FVX route are dropped
    assert_eq!(normalized.summary.routes_total, 6);
    assert_eq!(normalized.summary.routes_excluded, 2);
    assert_eq!(normalized.summary.routes_kept, 4);

    let short_names: Vec<_> = normalized
        .routes
        .iter()
        .map(|r| r.short_name.as_str())
        .collect();
    assert_eq!(short_names, ["1", "2", "26", "FAIR"]);

    let r1 = &normalized.routes[0];
    assert_eq!(r1.route_id, "1");
    assert_eq!(r1.resolved_id, Some(1));
    assert_eq!(r1.color, "8CC63F");
    assert_eq!(r1.long_name, "Downtown / McMillan");

    let fair = &normalized.routes[3];
    assert_eq!(fair.resolved_id, Some(1_001));
    assert_eq!(fair.color, "DD0077"); // feed-provided color wins
}

#[test]
fn test_headsigns_and_stop_names() {
    let feed = read_feed(fixture_dir()).unwrap();
    let normalized = normalize_feed(&CentralFraserValley, &feed).unwrap();

    // trips of excluded routes are gone
    assert_eq!(normalized.trips.len(), 5);
    let headsign_of = |trip_id: &str| {
        normalized
            .trips
            .iter()
            .find(|t| t.trip_id == trip_id)
            .unwrap()
            .headsign
            .clone()
    };
    assert_eq!(headsign_of("1-ABC-t1"), "Mission via Sumas");
    assert_eq!(headsign_of("1-ABC-t3"), "Fraser Highway via South Poplar");
    assert_eq!(headsign_of("2-ABC-t1"), "Bluejay");
    assert_eq!(headsign_of("2-ABC-t2"), "Bourquin Exchange Bay C");

    let direction_of = |route_id: &str, direction_id: u8| {
        normalized
            .directions
            .iter()
            .find(|d| d.route_id == route_id && d.direction_id == Some(direction_id))
            .unwrap()
            .headsign
            .clone()
    };
    assert_eq!(direction_of("1", 0), "Mission");
    assert_eq!(direction_of("1", 1), "Fraser Highway");
    assert_eq!(direction_of("2", 0), "Bluejay");
    // bay letters are dropped from direction headsigns only
    assert_eq!(direction_of("2", 1), "Bourquin Exchange");

    let stop_names: Vec<_> = normalized
        .stops
        .iter()
        .map(|s| s.stop_name.as_str())
        .collect();
    assert_eq!(
        stop_names,
        [
            "Main Street at Bay A",
            "McCallum Road at Marshall",
            "Bourquin Exchange Bay D",
        ]
    );
}

#[test]
fn test_written_output_files() {
    let feed = read_feed(fixture_dir()).unwrap();
    let normalized = normalize_feed(&CentralFraserValley, &feed).unwrap();

    let out = tempfile::tempdir().unwrap();
    write_normalized(out.path(), &normalized).unwrap();

    let routes_csv = fs::read_to_string(out.path().join("routes.csv")).unwrap();
    assert_eq!(routes_csv.lines().count(), 1 + 4);
    assert!(routes_csv.contains("F49AC1")); // route 26 table color

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["agency"], "CFV TS");
    assert_eq!(summary["agency_color"], "34B233");
    assert_eq!(summary["routes_kept"], 4);
}
