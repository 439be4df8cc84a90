//! Ordering of stored deals for digests and listings.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::deal::DealRecord;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*%").expect("valid percent regex"));

/// Destinations that do not earn the international bonus in [`deal_score`].
const DOMESTIC_AIRPORTS: &[&str] = &[
    "LAX", "SFO", "SEA", "PDX", "SAN", "LAS", "PHX", "DEN", "DFW", "IAH", "ATL", "MIA", "JFK",
    "LGA", "EWR", "BOS", "ORD", "DTW", "MSP", "MCO", "TPA", "FLL", "CLT", "RDU", "BWI", "DCA",
    "IAD",
];

/// Which ordering a listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMode {
    /// Biggest discounts first.
    #[default]
    Discount,
    /// Cheapest first.
    Price,
}

impl RankMode {
    /// Orders `deals` under this mode and keeps at most `limit`.
    #[must_use]
    pub fn rank<T: AsRef<DealRecord>>(self, deals: Vec<T>, limit: usize) -> Vec<T> {
        match self {
            RankMode::Discount => rank_by_discount(deals, limit),
            RankMode::Price => rank_by_price(deals, limit),
        }
    }
}

/// Percentage from a discount label such as `"SAVE 16%"`.
///
/// Returns 0 when there is no label or the value falls outside `1..=100`.
#[must_use]
pub fn discount_percentage(discount: Option<&str>) -> u32 {
    discount
        .and_then(|d| PERCENT_RE.captures(d))
        .and_then(|c| c[1].parse::<u32>().ok())
        .filter(|pct| (1..=100).contains(pct))
        .unwrap_or(0)
}

/// Composite desirability score; higher is better.
#[must_use]
pub fn deal_score(deal: &DealRecord) -> i64 {
    let mut score = i64::from(discount_percentage(deal.discount.as_deref())) * 10;

    if deal.price.is_some_and(|p| p < 500) {
        score += 50;
    }
    if !DOMESTIC_AIRPORTS.contains(&deal.destination.as_str()) {
        score += 20;
    }
    if deal
        .stops
        .as_deref()
        .is_some_and(|s| s.contains("Direct") || s.contains("Nonstop"))
    {
        score += 15;
    }
    if deal.price.is_some_and(|p| p > 1000) {
        score -= 20;
    }

    score
}

/// Cheapest first; deals without a price are dropped.
#[must_use]
pub fn rank_by_price<T: AsRef<DealRecord>>(deals: Vec<T>, limit: usize) -> Vec<T> {
    let mut priced: Vec<T> = deals
        .into_iter()
        .filter(|d| d.as_ref().price.is_some())
        .collect();
    priced.sort_by_key(|d| d.as_ref().price);
    priced.truncate(limit);
    priced
}

/// Biggest discount first; deals without a price are dropped.
///
/// Discounted deals sort ahead of undiscounted ones. Among undiscounted deals
/// the higher [`deal_score`] wins, then the lower price. When no deal carries
/// a discount at all this is [`rank_by_price`].
#[must_use]
pub fn rank_by_discount<T: AsRef<DealRecord>>(deals: Vec<T>, limit: usize) -> Vec<T> {
    let mut scored: Vec<(u32, i64, T)> = deals
        .into_iter()
        .filter(|d| d.as_ref().price.is_some())
        .map(|d| {
            let deal = d.as_ref();
            (
                discount_percentage(deal.discount.as_deref()),
                deal_score(deal),
                d,
            )
        })
        .collect();

    if scored.iter().all(|(pct, _, _)| *pct == 0) {
        return rank_by_price(scored.into_iter().map(|(_, _, d)| d).collect(), limit);
    }

    scored.sort_by(|(a_pct, a_score, a), (b_pct, b_score, b)| {
        match (*a_pct > 0, *b_pct > 0) {
            (true, true) => b_pct.cmp(a_pct),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => b_score
                .cmp(a_score)
                .then_with(|| a.as_ref().price.cmp(&b.as_ref().price)),
        }
    });
    scored.truncate(limit);
    scored.into_iter().map(|(_, _, d)| d).collect()
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
