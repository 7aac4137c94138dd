//! BC Transit, Central Fraser Valley Transit System (Abbotsford /
//! Mission bus network).
//!
//! Feed source: <https://www.bctransit.com/open-data>

use regex::Regex;
use std::sync::LazyLock;

use crate::agency::AgencyNormalizer;
use crate::error::NormalizeError;
use crate::feed::records::Route;
use crate::labels;

/// Brand green from the corporate graphic standards sheet.
const AGENCY_COLOR_GREEN: &str = "34B233";

/// Routes above this short name number belong to the Chilliwack app.
const CHILLIWACK_RSN_THRESHOLD: u32 = 50;

/// Long name marker for routes served by the Fraser Valley Express app.
const FVX_MARKER: &str = "FVX";

/// Brand colors by numeric route short name.
static ROUTE_COLORS: &[(u32, &str)] = &[
    (1, "8CC63F"),
    (2, "8077B6"),
    (3, "F8931E"),
    (4, "AC5C3B"),
    (5, "A54499"),
    (6, "00AEEF"),
    (7, "00AA4F"),
    (9, "A2BCCF"),
    (12, "0073AE"),
    (15, "49176D"),
    (16, "B3AA7E"),
    (17, "77AE99"),
    (21, "7C3F25"),
    (22, "FFC20E"),
    (23, "A3BADC"),
    (24, "ED1D8F"),
    (26, "F49AC1"),
    (31, "BF83B9"),
    (32, "EC1D8D"),
    (33, "367D0F"),
    (34, "FFC10E"),
    (35, "F78B1F"),
    (39, "0073AD"),
    (40, "49176D"),
    (66, "0D4D8B"),
];

/// Word-code short names with pre-assigned numeric identifiers, offset
/// past the numeric route range to avoid collisions.
static ROUTE_ID_OVERRIDES: &[(&str, i64)] = &[("FAIR", 1_001)];

/// Feed-variant qualifier appended to route identifiers ("1-ABC").
static ROUTE_ID_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[A-Z]+$").expect("valid regex"));

/// "from - to - via" headsign; only the "to" segment is kept.
static DASH_KEEP_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[^-]+ -)?(?P<to>[^-]+)(?:- [^-]+)?").expect("valid regex")
});

/// Leading "from -" segment of a trip headsign.
static DASH_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^-]+ -").expect("valid regex"));

/// "to - via" trip headsign; the dash becomes the word "via". The via
/// segment may already start with the connective ("- via Sumas"), which
/// must not double up.
static DASH_TO_VIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<to>[^-]+)- (?:via )?(?P<via>[^-]+)").expect("valid regex")
});

/// Transfer-only service suffix, dropped from display text.
static ENDS_WITH_CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) connector$").expect("valid regex"));

/// Bay letter artifacts carried over from stop descriptions.
static BAY_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbay [a-z]\b").expect("valid regex"));

/// Normalization profile for the Central Fraser Valley Transit System.
#[derive(Debug, Default, Clone, Copy)]
pub struct CentralFraserValley;

impl CentralFraserValley {
    /// Shared tail of both headsign pipelines.
    fn clean_head_sign(&self, headsign: &str) -> String {
        let hs = ENDS_WITH_CONNECTOR.replace(headsign, "");
        let hs = labels::clean_and(&hs);
        let hs = labels::clean_street_types(&hs);
        labels::clean_label(&hs)
    }
}

impl AgencyNormalizer for CentralFraserValley {
    fn agency_name(&self) -> &'static str {
        "CFV TS"
    }

    fn agency_color(&self) -> &'static str {
        AGENCY_COLOR_GREEN
    }

    fn should_exclude(&self, route: &Route) -> bool {
        if route.route_long_name.contains(FVX_MARKER) {
            return true; // served by the Fraser Valley Express app
        }
        if let Some(rsn) = route.numeric_short_name() {
            if rsn > CHILLIWACK_RSN_THRESHOLD {
                return true; // served by the Chilliwack app
            }
        }
        false
    }

    fn resolve_id(&self, short_name: &str) -> Option<i64> {
        ROUTE_ID_OVERRIDES
            .iter()
            .find(|(name, _)| *name == short_name)
            .map(|(_, id)| *id)
    }

    fn clean_route_id(&self, route_id: &str) -> String {
        ROUTE_ID_SUFFIX.replace(route_id, "").into_owned()
    }

    fn route_color(&self, route: &Route) -> Result<String, NormalizeError> {
        let rsn = route
            .numeric_short_name()
            .ok_or_else(|| NormalizeError::NonNumericShortName {
                route_id: route.route_id.clone(),
                short_name: route.route_short_name.clone(),
            })?;

        ROUTE_COLORS
            .iter()
            .find(|(n, _)| *n == rsn)
            .map(|(_, color)| (*color).to_string())
            .ok_or_else(|| NormalizeError::MissingRouteColor {
                route_id: route.route_id.clone(),
                short_name: route.route_short_name.clone(),
            })
    }

    fn clean_route_long_name(&self, long_name: &str) -> String {
        let name = labels::clean_slashes(long_name);
        let name = labels::clean_numbers(&name);
        let name = labels::clean_street_types(&name);
        labels::clean_label(&name)
    }

    fn clean_direction_headsign(
        &self,
        _direction_id: Option<u8>,
        _from_stop_name: bool,
        headsign: &str,
    ) -> String {
        let hs = DASH_KEEP_TO.replace(headsign, "${to}");
        let hs = labels::keep_to_and_remove_via(&hs);
        let hs = self.clean_head_sign(&hs);
        let hs = BAY_LETTER.replace_all(&hs, "");
        labels::tidy_whitespace(&hs)
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        let hs = DASH_FROM.replace(headsign, "");
        let hs = DASH_TO_VIA.replace(&hs, "${to} via ${via}");
        let hs = labels::keep_to_and_remove_via(&hs);
        self.clean_head_sign(&hs)
    }

    fn clean_stop_name(&self, stop_name: &str) -> String {
        let name = labels::clean_bounds(stop_name);
        let name = labels::clean_at(&name);
        let name = labels::clean_street_types(&name);
        labels::clean_label(&name)
    }

    fn allow_non_descriptive_headsigns(&self, route_id: i64) -> bool {
        route_id == 26 // both branches loop through the same stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(route_id: &str, short_name: &str, long_name: &str) -> Route {
        Route {
            route_id: route_id.to_string(),
            agency_id: None,
            route_short_name: short_name.to_string(),
            route_long_name: long_name.to_string(),
            route_type: Some(3),
            route_color: None,
        }
    }

    #[test]
    fn excludes_fvx_routes_regardless_of_short_name() {
        let agency = CentralFraserValley;
        let r = route("66-ABC", "66", "FVX Fraser Valley Express");
        assert!(agency.should_exclude(&r));
    }

    #[test]
    fn excludes_routes_above_chilliwack_threshold() {
        let agency = CentralFraserValley;
        assert!(agency.should_exclude(&route("55-ABC", "55", "Vedder")));
        assert!(!agency.should_exclude(&route("45-ABC", "45", "Sumas Ctr")));
    }

    #[test]
    fn non_numeric_short_name_skips_threshold_rule() {
        let agency = CentralFraserValley;
        assert!(!agency.should_exclude(&route("FAIR-ABC", "FAIR", "Fair Shuttle")));
    }

    #[test]
    fn exclusion_is_deterministic() {
        let agency = CentralFraserValley;
        let r = route("55-ABC", "55", "Vedder");
        assert_eq!(agency.should_exclude(&r), agency.should_exclude(&r));
    }

    #[test]
    fn resolves_known_word_codes() {
        let agency = CentralFraserValley;
        assert_eq!(agency.resolve_id("FAIR"), Some(1_001));
        assert_eq!(agency.resolve_id("EXPO"), None);
    }

    #[test]
    fn strips_feed_variant_suffix_from_route_id() {
        let agency = CentralFraserValley;
        assert_eq!(agency.clean_route_id("1-ABC"), "1");
        assert_eq!(agency.clean_route_id("26"), "26");
    }

    #[test]
    fn looks_up_route_colors() {
        let agency = CentralFraserValley;
        let color = agency.route_color(&route("66-ABC", "66", "UFV")).unwrap();
        assert_eq!(color, "0D4D8B");
        assert_eq!(color.len(), 6);
        assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn unmapped_numeric_route_color_is_fatal() {
        let agency = CentralFraserValley;
        let err = agency
            .route_color(&route("99-ABC", "99", "Nowhere"))
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingRouteColor {
                route_id: "99-ABC".to_string(),
                short_name: "99".to_string(),
            }
        );
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn color_lookup_requires_a_numeric_short_name() {
        let agency = CentralFraserValley;
        let err = agency
            .route_color(&route("FAIR-ABC", "FAIR", "Fair Shuttle"))
            .unwrap_err();
        assert!(matches!(err, NormalizeError::NonNumericShortName { .. }));
    }

    #[test]
    fn every_table_color_is_well_formed() {
        for (rsn, color) in ROUTE_COLORS {
            assert_eq!(color.len(), 6, "route {rsn}");
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()), "route {rsn}");
        }
    }

    #[test]
    fn direction_headsign_keeps_middle_dash_segment() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_direction_headsign(Some(0), false, "Abbotsford - Mission - via Sumas"),
            "Mission"
        );
    }

    #[test]
    fn direction_headsign_without_dashes_passes_through_segmentation() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_direction_headsign(Some(1), false, "Downtown"),
            "Downtown"
        );
    }

    #[test]
    fn direction_headsign_drops_bay_letters() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_direction_headsign(Some(0), true, "Clearbrook - Bourquin Exch Bay C"),
            "Bourquin Exchange"
        );
    }

    #[test]
    fn trip_headsign_turns_dash_into_via() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_trip_headsign("Downtown - Fraser Hwy- South Poplar"),
            "Fraser Highway via South Poplar"
        );
    }

    #[test]
    fn trip_headsign_does_not_double_an_existing_via() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_trip_headsign("Abbotsford - Mission - via Sumas"),
            "Mission via Sumas"
        );
    }

    #[test]
    fn trip_headsign_strips_leading_from_segment() {
        let agency = CentralFraserValley;
        assert_eq!(agency.clean_trip_headsign("Downtown - UFV"), "UFV");
    }

    #[test]
    fn trip_headsign_collapses_to_connective() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_trip_headsign("Clearbrook to Downtown via Essendene"),
            "Downtown"
        );
    }

    #[test]
    fn headsign_strips_connector_suffix() {
        let agency = CentralFraserValley;
        assert_eq!(agency.clean_trip_headsign("UFV Connector"), "UFV");
    }

    #[test]
    fn headsign_cleaning_is_idempotent() {
        let agency = CentralFraserValley;
        let once = agency.clean_trip_headsign("Downtown - Fraser Hwy- South Poplar");
        assert_eq!(agency.clean_trip_headsign(&once), once);

        let once = agency.clean_direction_headsign(None, false, "Abbotsford - Mission - via Sumas");
        assert_eq!(agency.clean_direction_headsign(None, false, &once), once);
    }

    #[test]
    fn headsign_cleaning_is_total() {
        let agency = CentralFraserValley;
        assert_eq!(agency.clean_trip_headsign(""), "");
        assert_eq!(agency.clean_direction_headsign(None, false, ""), "");
        assert_eq!(agency.clean_stop_name(""), "");
    }

    #[test]
    fn stop_name_normalizes_at_and_street_types() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_stop_name("Main St @ Bay A"),
            "Main Street at Bay A"
        );
    }

    #[test]
    fn stop_name_drops_bounds() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_stop_name("Westbound McCallum Rd at Marshall"),
            "McCallum Road at Marshall"
        );
    }

    #[test]
    fn long_name_cleanup_normalizes_slashes_and_street_types() {
        let agency = CentralFraserValley;
        assert_eq!(
            agency.clean_route_long_name("Downtown/McMillan via 1ST Ave"),
            "Downtown / McMillan via 1st Avenue"
        );
    }

    #[test]
    fn route_26_may_keep_non_descriptive_headsigns() {
        let agency = CentralFraserValley;
        assert!(agency.allow_non_descriptive_headsigns(26));
        assert!(!agency.allow_non_descriptive_headsigns(2));
    }
}
