//! Card-container resolution.
//!
//! A card is the smallest table holding one option's date cell, price
//! badge, and call-to-action link. The alert template nests tables
//! unevenly, so resolution tries three tiers, most specific first:
//!
//! 1. the nearest ancestor table whose class carries the container marker;
//! 2. a structural climb: date row, its table, that table's cell, the outer
//!    row holding both the date/price cell and the button cell, then the
//!    outer row's table;
//! 3. the closest table around the date cell.

use scraper::ElementRef;

use crate::dom::{class_contains, closest, element_ancestors};

/// Class fragment the alert template puts on each card's outer table.
pub(crate) const CONTAINER_CLASS_MARKER: &str = "broadIntentMarketContentDiscountedMdp";

pub(crate) type ContainerTier = for<'a> fn(ElementRef<'a>) -> Option<ElementRef<'a>>;

/// Container tiers in priority order.
pub(crate) const CONTAINER_TIERS: [(&str, ContainerTier); 3] = [
    ("marker_class", container_by_marker),
    ("row_climb", container_by_row_climb),
    ("closest_table", container_by_closest_table),
];

/// Resolves the card container of `date_cell`, or `None` when the cell is
/// not inside any table.
pub(crate) fn resolve_card_container(date_cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    CONTAINER_TIERS.iter().find_map(|(tier, resolve)| {
        let container = resolve(date_cell)?;
        tracing::trace!(tier, "resolved card container");
        Some(container)
    })
}

pub(crate) fn container_by_marker(date_cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element_ancestors(date_cell).find(|el| {
        el.value().name() == "table" && class_contains(*el, CONTAINER_CLASS_MARKER)
    })
}

pub(crate) fn container_by_row_climb(date_cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let date_row = closest(date_cell, "tr")?;
    let inner_table = closest(date_row, "table")?;
    let left_cell = closest(inner_table, "td")?;
    let outer_row = closest(left_cell, "tr")?;
    closest(outer_row, "table")
}

pub(crate) fn container_by_closest_table(date_cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    closest(date_cell, "table")
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn date_cell(doc: &Html) -> ElementRef<'_> {
        let selector = Selector::parse(r#"td[class*="date-pair"]"#).unwrap();
        doc.select(&selector).next().expect("date cell present")
    }

    fn id_of(el: Option<ElementRef<'_>>) -> Option<&str> {
        el.and_then(|e| e.value().attr("id"))
    }

    const NESTED: &str = r#"
        <table id="outer"><tr>
          <td><table id="inner"><tr><td class="date-pair">Thu, Oct 30 – Thu, Nov 6</td></tr></table></td>
          <td><a class="view-btn" href="https://c.gle/a">View</a></td>
        </tr></table>"#;

    #[test]
    fn marker_tier_picks_nearest_marked_table() {
        let doc = Html::parse_document(&format!(
            r#"<table id="card" class="x {CONTAINER_CLASS_MARKER}"><tr><td>{NESTED}</td></tr></table>"#
        ));
        let cell = date_cell(&doc);
        assert_eq!(id_of(container_by_marker(cell)), Some("card"));
        assert_eq!(id_of(resolve_card_container(cell)), Some("card"));
    }

    #[test]
    fn row_climb_tier_reaches_outer_table() {
        let doc = Html::parse_document(NESTED);
        let cell = date_cell(&doc);
        assert!(container_by_marker(cell).is_none());
        assert_eq!(id_of(container_by_row_climb(cell)), Some("outer"));
        assert_eq!(id_of(resolve_card_container(cell)), Some("outer"));
    }

    #[test]
    fn single_table_falls_to_closest_table() {
        let doc = Html::parse_document(
            r#"<table id="only"><tr><td class="date-pair">Sun, Oct 19 – Tue, Oct 28</td></tr></table>"#,
        );
        let cell = date_cell(&doc);
        assert!(container_by_marker(cell).is_none());
        assert!(container_by_row_climb(cell).is_none());
        assert_eq!(id_of(resolve_card_container(cell)), Some("only"));
    }
}
