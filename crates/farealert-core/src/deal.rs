use serde::{Deserialize, Serialize};

use crate::error::DealValidationError;

/// The only currency the alert source quotes prices in.
pub const DEAL_CURRENCY: &str = "USD";

/// Placeholder used for an origin or destination that could not be resolved.
pub const UNKNOWN_AIRPORT: &str = "UNK";

/// One flight-deal option recovered from an alert email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    /// IATA-style code when the card carried a route, otherwise the subject
    /// hint or [`UNKNOWN_AIRPORT`].
    pub origin: String,
    pub destination: String,
    /// Whole US dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Travel-date range exactly as the email rendered it.
    #[serde(default)]
    pub dates: String,
    /// Percent-decoded booking link, or empty when none was found.
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    /// `"Nonstop"`, `"1 stop"`, or the raw fragment when unrecognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<String>,
    /// `"LAX–BCN"` (en dash).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Lowercase `"12 hr"` / `"18 hr 5 min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// e.g. `"SAVE 16%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

fn default_currency() -> String {
    DEAL_CURRENCY.to_string()
}

impl DealRecord {
    /// A record carrying only endpoints and dates; every other field empty.
    #[must_use]
    pub fn new(origin: String, destination: String, dates: String) -> Self {
        Self {
            origin,
            destination,
            price: None,
            currency: default_currency(),
            dates,
            link: String::new(),
            airline: None,
            stops: None,
            route: None,
            duration: None,
            discount: None,
        }
    }

    /// The minimal record emitted when a candidate card cannot be extracted.
    ///
    /// Hints shorter than two characters collapse to [`UNKNOWN_AIRPORT`], so
    /// the result always passes [`DealRecord::validate`].
    #[must_use]
    pub fn fallback(origin_hint: Option<&str>, destination_hint: Option<&str>, dates: &str) -> Self {
        Self::new(
            airport_or_unknown(origin_hint),
            airport_or_unknown(destination_hint),
            dates.to_string(),
        )
    }

    /// Checks the field shapes downstream consumers rely on.
    ///
    /// # Errors
    ///
    /// Returns the first [`DealValidationError`] found: an origin or
    /// destination under two characters, a zero price, a currency other than
    /// [`DEAL_CURRENCY`], or a non-empty link that is not an absolute URL.
    pub fn validate(&self) -> Result<(), DealValidationError> {
        check_airport("origin", &self.origin)?;
        check_airport("destination", &self.destination)?;

        if self.price == Some(0) {
            return Err(DealValidationError::NonPositivePrice);
        }

        if self.currency != DEAL_CURRENCY {
            return Err(DealValidationError::Currency(self.currency.clone()));
        }

        if !self.link.is_empty() {
            url::Url::parse(&self.link).map_err(|e| DealValidationError::InvalidLink {
                link: self.link.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}

impl AsRef<DealRecord> for DealRecord {
    fn as_ref(&self) -> &DealRecord {
        self
    }
}

/// Trims `hint` and returns it when at least two characters remain,
/// otherwise [`UNKNOWN_AIRPORT`].
#[must_use]
pub fn airport_or_unknown(hint: Option<&str>) -> String {
    match hint.map(str::trim) {
        Some(value) if value.chars().count() >= 2 => value.to_string(),
        _ => UNKNOWN_AIRPORT.to_string(),
    }
}

fn check_airport(field: &'static str, value: &str) -> Result<(), DealValidationError> {
    if value.chars().count() < 2 {
        return Err(DealValidationError::AirportTooShort {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Compute a stable dedup key for a deal.
///
/// SHA-256 over `origin|destination|price|dates|link`, with an absent price
/// written as the empty string. Hex-encoded.
#[must_use]
pub fn make_deal_key(deal: &DealRecord) -> String {
    use sha2::{Digest, Sha256};
    let price = deal.price.map(|p| p.to_string()).unwrap_or_default();
    let input = format!(
        "{}|{}|{}|{}|{}",
        deal.origin, deal.destination, price, deal.dates, deal.link
    );
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
#[path = "deal_test.rs"]
mod tests;
