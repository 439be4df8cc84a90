//! Plain-text extraction path, used when an email has no HTML body.
//!
//! Each weekday/month/day date range is one candidate. A candidate's fields
//! are searched in everything after its date range, so a sparse candidate
//! can pick up fields belonging to the next one.

use std::sync::LazyLock;

use farealert_core::DealRecord;
use regex::Regex;

use crate::error::ExtractError;
use crate::flight::{route_codes, FlightDetails};
use crate::html::{decode_link, resolve_endpoints};
use crate::price::{parse_amount, scan_discount, FROM_PRICE_RE};
use crate::subject::SubjectHint;

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][a-z]{2},?\s+[A-Z][a-z]{2}\s+\d{1,2})\s*[–-]\s*([A-Z][a-z]{2},?\s+[A-Z][a-z]{2}\s+\d{1,2})",
    )
    .expect("valid date-range regex")
});

/// Extracts candidates from `text`; a candidate failing validation is
/// dropped.
pub(crate) fn parse_text(text: &str, hint: &SubjectHint, link_re: &Regex) -> Vec<DealRecord> {
    let mut deals = Vec::new();
    for (index, caps) in DATE_RANGE_RE.captures_iter(text).enumerate() {
        let dates = format!("{} \u{2013} {}", &caps[1], &caps[2]);
        let window = &text[caps.get(0).map_or(text.len(), |m| m.end())..];

        match extract_candidate(window, dates, hint, link_re) {
            Ok(deal) => deals.push(deal),
            Err(error) => {
                tracing::warn!(index, error = %error, "dropping text candidate");
            }
        }
    }
    tracing::debug!(deals = deals.len(), "parsed plain-text body");
    deals
}

fn extract_candidate(
    window: &str,
    dates: String,
    hint: &SubjectHint,
    link_re: &Regex,
) -> Result<DealRecord, ExtractError> {
    let route = route_codes(window)
        .map(|(origin, destination)| format!("{origin}\u{2013}{destination}"));
    let flight = FlightDetails {
        route,
        ..FlightDetails::default()
    };
    let (origin, destination) = resolve_endpoints(&flight, hint);

    let mut deal = DealRecord::new(origin, destination, dates);
    deal.price = FROM_PRICE_RE
        .captures(window)
        .and_then(|c| parse_amount(&c[1]));
    deal.discount = scan_discount(window);
    deal.route = flight.route;
    deal.link = link_re
        .find(window)
        .map(|m| decode_link(m.as_str()))
        .transpose()?
        .unwrap_or_default();

    deal.validate()?;
    Ok(deal)
}

/// Matcher for tracking links in plain text: the prefix followed by a
/// token of URL-safe characters.
///
/// # Errors
///
/// Returns [`ExtractError::Pattern`] if the pattern fails to compile.
pub(crate) fn tracking_link_regex(prefix: &str) -> Result<Regex, ExtractError> {
    Ok(Regex::new(&format!("{}[A-Za-z0-9_-]+", regex::escape(prefix)))?)
}
