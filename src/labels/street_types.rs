//! Street type abbreviation table.
//!
//! Maps the abbreviations BC Transit feeds use in stop names and route
//! long names to their full display form. Applied as whole words only,
//! case-insensitively, with an optional trailing period.

use regex::Regex;
use std::sync::LazyLock;

/// Abbreviation → display form. Covers the street types that actually
/// occur in the agency's feeds.
static STREET_TYPES: &[(&str, &str)] = &[
    ("Ave", "Avenue"),
    ("Av", "Avenue"),
    ("Blvd", "Boulevard"),
    ("Cres", "Crescent"),
    ("Crt", "Court"),
    ("Ct", "Court"),
    ("Ctr", "Centre"),
    ("Ctre", "Centre"),
    ("Dr", "Drive"),
    ("Exch", "Exchange"),
    ("Gdns", "Gardens"),
    ("Hts", "Heights"),
    ("Hwy", "Highway"),
    ("Ln", "Lane"),
    ("Mtn", "Mountain"),
    ("Pkwy", "Parkway"),
    ("Pky", "Parkway"),
    ("Pl", "Place"),
    ("Rd", "Road"),
    ("Sq", "Square"),
    ("St", "Street"),
    ("Stn", "Station"),
    ("Ter", "Terrace"),
];

/// Compiled (pattern, replacement) pairs, built once on first use.
static STREET_TYPE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    STREET_TYPES
        .iter()
        .map(|(abbr, full)| {
            let pattern = format!(r"(?i)\b{}\b\.?", regex::escape(abbr));
            (Regex::new(&pattern).expect("valid street type regex"), *full)
        })
        .collect()
});

/// Expands street type abbreviations to their full display form.
pub fn clean_street_types(input: &str) -> String {
    let mut out = input.to_string();
    for (pattern, full) in STREET_TYPE_RULES.iter() {
        out = pattern.replace_all(&out, *full).into_owned();
    }
    out
}
