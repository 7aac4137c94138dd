//! Generic label cleaning for rider-facing transit text.
//!
//! Pure string → string rewrites shared by every per-agency profile:
//! street type expansion, bound/at/and normalization, via-clause
//! collapsing, and the final whitespace + capitalization pass. Every
//! function is total: a pattern that does not match is a no-op, and an
//! empty result is a valid result.

mod street_types;

pub use street_types::clean_street_types;

use regex::Regex;
use std::sync::LazyLock;

/// Runs of whitespace, collapsed to a single space by [`tidy_whitespace`].
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Space inside parentheses: "( x )" → "(x)".
static PAREN_OPEN_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s+").expect("valid regex"));
static PAREN_CLOSE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\)").expect("valid regex"));

/// Directional bound decorations in stop names ("(EB)", "Westbound").
static BOUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(?\b(?:eastbound|westbound|northbound|southbound|eb|wb|nb|sb)\b\)?")
        .expect("valid regex")
});

/// Variant "at" separators between two place names.
static AT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:@|at)\s+").expect("valid regex"));

/// Variant "and" conjunctions.
static AND_CONJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:and|&|\+)\s+").expect("valid regex"));

/// Slash separators with uneven spacing.
static SLASH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid regex"));

/// Ordinal suffix glued to a number, any case ("1ST", "2Nd").
static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)((?i:st|nd|rd|th))\b").expect("valid regex"));

/// Zero-padded standalone numbers ("05").
static LEADING_ZEROS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b0+(\d+)\b").expect("valid regex"));

/// "from to <destination> via <point>" connective form.
static TO_CONNECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:.*\s)?to\s+(.+)$").expect("valid regex"));
static VIA_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+via\s+.*$").expect("valid regex"));

/// Words kept lowercase mid-label by [`clean_label`].
static SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "at", "de", "du", "la", "of", "on", "or", "the", "to", "via", "with",
];

/// Collapses whitespace runs and trims the ends.
pub fn tidy_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input, " ").trim().to_string()
}

/// Strips directional bound decorations ("(EB)", "Eastbound") from a
/// stop name.
pub fn clean_bounds(input: &str) -> String {
    tidy_whitespace(&BOUNDS.replace_all(input, ""))
}

/// Unifies "at" separator variants ("@", "AT") into the single
/// lowercase form used for display.
pub fn clean_at(input: &str) -> String {
    AT_SEPARATOR.replace_all(input, " at ").into_owned()
}

/// Unifies "and" conjunction variants ("and", "+") into "&".
pub fn clean_and(input: &str) -> String {
    AND_CONJUNCTION.replace_all(input, " & ").into_owned()
}

/// Normalizes spacing around slash separators: "A/B" → "A / B".
pub fn clean_slashes(input: &str) -> String {
    SLASH_SEPARATOR.replace_all(input, " / ").into_owned()
}

/// Tidies numbers in labels: lowercases ordinal suffixes and drops
/// zero padding.
pub fn clean_numbers(input: &str) -> String {
    let out = ORDINAL_SUFFIX.replace_all(input, |caps: &regex::Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_lowercase())
    });
    LEADING_ZEROS.replace_all(&out, "$1").into_owned()
}

/// Collapses a "from to <destination> via <point>" headsign to its
/// destination.
///
/// Acts only when the "to" connective is present: everything before it
/// is dropped and a trailing "via …" clause is removed. A plain
/// "<destination> via <point>" label is presentation text and passes
/// through unchanged.
pub fn keep_to_and_remove_via(input: &str) -> String {
    match TO_CONNECTIVE.captures(input) {
        Some(caps) => {
            let destination = caps.get(1).map_or("", |m| m.as_str());
            VIA_CLAUSE.replace(destination, "").into_owned()
        }
        None => input.to_string(),
    }
}

/// Final label cleanup: whitespace collapse, paren tightening, and
/// word capitalization (connectives like "at" and "via" stay lowercase
/// past the first word; existing uppercase is never touched, so
/// acronyms survive).
pub fn clean_label(input: &str) -> String {
    let out = tidy_whitespace(input);
    let out = PAREN_OPEN_SPACE.replace_all(&out, "(");
    let out = PAREN_CLOSE_SPACE.replace_all(&out, ")");

    out.split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && SMALL_WORDS.contains(&word.to_lowercase().as_str()) {
                word.to_string()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
