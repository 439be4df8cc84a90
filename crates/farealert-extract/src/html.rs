//! HTML extraction path.
//!
//! Every `td` whose class mentions "date-pair" anchors one candidate deal.
//! Each candidate resolves to a record; a card that cannot be extracted
//! cleanly still yields a fallback record carrying its date text.

use std::sync::LazyLock;

use farealert_core::{airport_or_unknown, DealRecord};
use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Html, Selector};

use crate::card::resolve_card_container;
use crate::dom::collapsed_text;
use crate::encoding::maybe_decode_quoted_printable;
use crate::error::ExtractError;
use crate::flight::{find_flight_row, parse_flight_blob, FlightDetails};
use crate::link::LinkFinder;
use crate::price::{find_card_price, CardPrice};
use crate::subject::SubjectHint;

pub(crate) static DATE_CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"td[class*="date-pair"]"#).expect("valid date-pair selector")
});

/// Extracts one record per date-pair cell, in document order.
pub(crate) fn parse_html(html: &str, hint: &SubjectHint, links: &LinkFinder) -> Vec<DealRecord> {
    let decoded = maybe_decode_quoted_printable(html);
    let document = Html::parse_document(&decoded);

    let cells: Vec<ElementRef<'_>> = document.select(&DATE_CELL).collect();
    tracing::debug!(candidates = cells.len(), "located date-pair cells");

    cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            let dates = collapsed_text(cell);
            extract_card(cell, &dates, hint, links).unwrap_or_else(|error| {
                tracing::warn!(index, dates = %dates, error = %error, "card extraction failed; emitting fallback record");
                DealRecord::fallback(hint.origin.as_deref(), hint.destination.as_deref(), &dates)
            })
        })
        .collect()
}

fn extract_card(
    cell: ElementRef<'_>,
    dates: &str,
    hint: &SubjectHint,
    links: &LinkFinder,
) -> Result<DealRecord, ExtractError> {
    let Some(card) = resolve_card_container(cell) else {
        tracing::debug!(dates, "no card container; keeping dates only");
        return Ok(DealRecord::fallback(
            hint.origin.as_deref(),
            hint.destination.as_deref(),
            dates,
        ));
    };

    let CardPrice { price, discount } = find_card_price(card);
    let flight = find_flight_row(card)
        .map(|row| parse_flight_blob(&collapsed_text(row)))
        .unwrap_or_default();
    let link = links
        .find(card)
        .map(|raw| decode_link(&raw))
        .transpose()?
        .unwrap_or_default();

    let (origin, destination) = resolve_endpoints(&flight, hint);
    let FlightDetails {
        airline,
        stops,
        route,
        duration,
    } = flight;

    let mut deal = DealRecord::new(origin, destination, dates.to_string());
    deal.price = price;
    deal.link = link;
    deal.airline = airline;
    deal.stops = stops;
    deal.route = route;
    deal.duration = duration;
    deal.discount = discount;

    tracing::debug!(
        origin = %deal.origin,
        destination = %deal.destination,
        price = ?deal.price,
        discount = ?deal.discount,
        has_link = !deal.link.is_empty(),
        "extracted card"
    );

    deal.validate()?;
    Ok(deal)
}

/// Codes from the card's route win; the subject hint fills in otherwise.
pub(crate) fn resolve_endpoints(flight: &FlightDetails, hint: &SubjectHint) -> (String, String) {
    match flight.route_codes() {
        Some(codes) => codes,
        None => (
            airport_or_unknown(hint.origin.as_deref()),
            airport_or_unknown(hint.destination.as_deref()),
        ),
    }
}

/// Percent-decodes a booking link.
///
/// # Errors
///
/// Returns [`ExtractError::LinkDecode`] when the decoded bytes are not UTF-8.
pub(crate) fn decode_link(raw: &str) -> Result<String, ExtractError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|source| ExtractError::LinkDecode {
            link: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_link_unescapes_percent_sequences() {
        assert_eq!(
            decode_link("https://c.gle/abc%3Fq%3D1").unwrap(),
            "https://c.gle/abc?q=1"
        );
    }

    #[test]
    fn decode_link_rejects_invalid_utf8() {
        assert!(matches!(
            decode_link("https://c.gle/%FF"),
            Err(ExtractError::LinkDecode { .. })
        ));
    }

    #[test]
    fn route_codes_beat_subject_hint() {
        let flight = parse_flight_blob("Iberia · Nonstop · LAX–BCN · 12 hr");
        let hint = SubjectHint {
            origin: Some("Burbank, Los Angeles".into()),
            destination: Some("Barcelona".into()),
        };
        assert_eq!(
            resolve_endpoints(&flight, &hint),
            ("LAX".to_string(), "BCN".to_string())
        );
    }

    #[test]
    fn missing_route_and_hint_is_unknown() {
        assert_eq!(
            resolve_endpoints(&FlightDetails::default(), &SubjectHint::default()),
            ("UNK".to_string(), "UNK".to_string())
        );
    }
}
