//! Booking-link discovery for a card.
//!
//! Tiers, first hit wins: the card's "view-btn" anchor, any anchor in the
//! card pointing at the tracking host, then a bounded scan of the rows that
//! follow the card (stopping at the next card).

use std::sync::LazyLock;

use farealert_core::ExtractorConfig;
use scraper::{ElementRef, Selector};

use crate::dom::{first_descendant, href, next_element_sibling};
use crate::error::ExtractError;
use crate::html::DATE_CELL;

static VIEW_BUTTON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[class*="view-btn"]"#).expect("valid view-btn selector"));

type LinkTier = fn(&LinkFinder, ElementRef<'_>) -> Option<String>;

const LINK_TIERS: [(&str, LinkTier); 3] = [
    ("view_button", LinkFinder::view_button),
    ("tracking_href", LinkFinder::tracking_href),
    ("sibling_scan", LinkFinder::sibling_scan),
];

/// Locates the raw (still percent-encoded) booking `href` for a card.
#[derive(Debug)]
pub(crate) struct LinkFinder {
    tracking_anchor: Selector,
    any_booking_anchor: Selector,
    sibling_scan_limit: usize,
}

impl LinkFinder {
    pub(crate) fn new(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        let prefix = &config.tracking_link_prefix;
        if prefix.trim().is_empty() || prefix.contains('"') {
            return Err(ExtractError::InvalidConfig {
                reason: format!("tracking link prefix {prefix:?} is empty or contains a quote"),
            });
        }
        let parse = |css: String| {
            Selector::parse(&css).map_err(|e| ExtractError::InvalidConfig {
                reason: format!("selector {css:?}: {e:?}"),
            })
        };
        Ok(Self {
            tracking_anchor: parse(format!(r#"a[href*="{prefix}"]"#))?,
            any_booking_anchor: parse(format!(r#"a[class*="view-btn"], a[href*="{prefix}"]"#))?,
            sibling_scan_limit: config.sibling_scan_limit,
        })
    }

    pub(crate) fn find(&self, card: ElementRef<'_>) -> Option<String> {
        LINK_TIERS.iter().find_map(|(tier, lookup)| {
            let link = lookup(self, card)?;
            tracing::trace!(tier, "resolved booking link");
            Some(link)
        })
    }

    #[allow(clippy::unused_self)]
    fn view_button(&self, card: ElementRef<'_>) -> Option<String> {
        first_descendant(card, &VIEW_BUTTON)
            .and_then(href)
            .map(str::to_string)
    }

    fn tracking_href(&self, card: ElementRef<'_>) -> Option<String> {
        first_descendant(card, &self.tracking_anchor)
            .and_then(href)
            .map(str::to_string)
    }

    fn sibling_scan(&self, card: ElementRef<'_>) -> Option<String> {
        let mut sibling = next_element_sibling(card);
        for _ in 0..self.sibling_scan_limit {
            let current = sibling?;
            if first_descendant(current, &DATE_CELL).is_some() {
                return None;
            }
            if let Some(anchor) = first_descendant(current, &self.any_booking_anchor) {
                return href(anchor).map(str::to_string);
            }
            sibling = next_element_sibling(current);
        }
        None
    }
}

#[cfg(test)]
#[path = "link_test.rs"]
mod tests;
