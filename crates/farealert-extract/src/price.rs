//! Price and discount extraction, scoped to one card.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::dom::{collapsed_text, descendants_matching, first_descendant, raw_text};

static PRICE_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[class*="price"]"#).expect("valid price selector"));
static BADGE_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"span[class*="badge"]"#).expect("valid badge selector"));

static DOLLAR_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d").expect("valid dollar-digit regex"));
static DOLLAR_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([\d,]+)").expect("valid dollar-amount regex"));
pub(crate) static FROM_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)From\s+\$([\d,]+)").expect("valid from-price regex"));
static SAVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SAVE\s+(\d+)%").expect("valid save regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CardPrice {
    pub price: Option<u64>,
    pub discount: Option<String>,
}

/// Reads price and discount from within `card` only.
///
/// A `span` whose class mentions "price" and whose text holds a dollar
/// amount wins; otherwise the card's text is scanned for `From $N`. The
/// discount comes from a "badge" span, else a `SAVE N%` anywhere in the card.
pub(crate) fn find_card_price(card: ElementRef<'_>) -> CardPrice {
    let price_span = descendants_matching(card, &PRICE_SPAN)
        .into_iter()
        .find(|span| DOLLAR_DIGIT_RE.is_match(&raw_text(*span)));

    if let Some(span) = price_span {
        let raw = collapsed_text(span);
        let price = DOLLAR_AMOUNT_RE
            .captures(&raw)
            .and_then(|c| parse_amount(&c[1]));
        let discount = first_descendant(card, &BADGE_SPAN)
            .map(collapsed_text)
            .filter(|badge| !badge.is_empty())
            .or_else(|| scan_discount(&raw_text(card)));
        return CardPrice { price, discount };
    }

    let text = raw_text(card);
    match FROM_PRICE_RE.captures(&text) {
        Some(c) => CardPrice {
            price: parse_amount(&c[1]),
            discount: scan_discount(&text),
        },
        None => CardPrice::default(),
    }
}

/// First `SAVE N%` in `text`, normalized to upper-case `SAVE N%`.
pub(crate) fn scan_discount(text: &str) -> Option<String> {
    SAVE_RE.captures(text).map(|c| format!("SAVE {}%", &c[1]))
}

/// Whole dollars from `"1,234"`; `None` when no digits remain or the value
/// overflows.
pub(crate) fn parse_amount(digits: &str) -> Option<u64> {
    let cleaned: String = digits.chars().filter(char::is_ascii_digit).collect();
    cleaned.parse().ok()
}
