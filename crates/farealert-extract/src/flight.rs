//! Flight-detail row location and parsing.
//!
//! The row reads `"Airline · Stops · XXX–YYY · Duration"` with U+00B7
//! separators; fields are interpreted by position.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::dom::{descendants_matching, first_descendant, raw_text};

static FLIGHT_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.flight").expect("valid flight-row selector"));
static ANY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));

/// Two three-letter codes joined by a hyphen or en dash.
static ROUTE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{3})\s*[–-]\s*([A-Z]{3})").expect("valid route-pair regex")
});
static HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("valid hyphen regex"));
static STOPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(nonstop|\d+\s*stops?)").expect("valid stops regex"));
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\s*hr(?:\s*\d*\s*min)?)").expect("valid duration regex")
});

const SEPARATOR: char = '\u{b7}';

/// Normalized fields of one flight-detail row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDetails {
    pub airline: Option<String>,
    pub stops: Option<String>,
    pub route: Option<String>,
    pub duration: Option<String>,
}

impl FlightDetails {
    /// Origin and destination codes from the normalized route.
    #[must_use]
    pub fn route_codes(&self) -> Option<(String, String)> {
        self.route.as_deref().and_then(route_codes)
    }
}

/// Finds the flight-detail row inside `card`.
///
/// An explicit `tr.flight` wins; otherwise the first row whose text holds a
/// middle dot and a code pair.
pub(crate) fn find_flight_row(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    first_descendant(card, &FLIGHT_ROW).or_else(|| {
        descendants_matching(card, &ANY_ROW).into_iter().find(|row| {
            let text = raw_text(*row);
            text.contains(SEPARATOR) && ROUTE_PAIR_RE.is_match(&text)
        })
    })
}

/// Splits a flight row on middle dots and normalizes each positional field.
///
/// Segments are trimmed and empty ones dropped; fewer than four segments
/// leave the trailing fields `None`.
#[must_use]
pub fn parse_flight_blob(text: &str) -> FlightDetails {
    let parts: Vec<&str> = text
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    FlightDetails {
        airline: parts.first().map(|s| (*s).to_string()),
        stops: parts.get(1).map(|s| normalize_stops(s)),
        route: parts.get(2).map(|s| normalize_route(s)),
        duration: parts.get(3).map(|s| normalize_duration(s)),
    }
}

/// `"Nonstop"` / `"N stop(s)"` when recognized, else the fragment as-is.
fn normalize_stops(raw: &str) -> String {
    STOPS_RE.captures(raw).map_or_else(
        || raw.to_string(),
        |c| c[1].split_whitespace().collect::<Vec<_>>().join(" "),
    )
}

/// `"XXX–YYY"` with an en dash whenever a code pair is present.
fn normalize_route(raw: &str) -> String {
    match route_codes(raw) {
        Some((origin, destination)) => format!("{origin}\u{2013}{destination}"),
        None => HYPHEN_RE.replace_all(raw, "\u{2013}").into_owned(),
    }
}

/// Lowercase `"N hr"` / `"N hr M min"` when recognized, else the lowercased
/// fragment.
fn normalize_duration(raw: &str) -> String {
    let lower = raw.to_lowercase();
    DURATION_RE
        .captures(&lower)
        .map_or_else(|| lower.clone(), |c| c[1].to_string())
}

pub(crate) fn route_codes(route: &str) -> Option<(String, String)> {
    ROUTE_PAIR_RE
        .captures(route)
        .map(|c| (c[1].to_string(), c[2].to_string()))
}

#[cfg(test)]
#[path = "flight_test.rs"]
mod tests;
