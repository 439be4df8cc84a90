//! Email-level entry points.

use std::sync::LazyLock;

use farealert_core::{DealRecord, ExtractorConfig};
use regex::Regex;

use crate::error::ExtractError;
use crate::html::parse_html;
use crate::link::LinkFinder;
use crate::subject::subject_route_hint;
use crate::text::{parse_text, tracking_link_regex};

static DEFAULT_EXTRACTOR: LazyLock<DealExtractor> = LazyLock::new(|| {
    DealExtractor::new(ExtractorConfig::default()).expect("default extractor config is valid")
});

/// Parses fare-alert emails into [`DealRecord`]s.
///
/// Holds only compiled matchers; a single extractor can be shared across
/// threads and reused for any number of emails.
#[derive(Debug)]
pub struct DealExtractor {
    config: ExtractorConfig,
    links: LinkFinder,
    text_link_re: Regex,
}

impl DealExtractor {
    /// Builds an extractor for the given tracking-link prefix and sibling-scan
    /// limit.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if the tracking-link prefix is
    /// blank or contains a double quote, or [`ExtractError::Pattern`] if the
    /// text-path link pattern cannot be compiled.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let links = LinkFinder::new(&config)?;
        let text_link_re = tracking_link_regex(&config.tracking_link_prefix)?;
        Ok(Self {
            config,
            links,
            text_link_re,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parses one email.
    ///
    /// The HTML body is used when it has any non-whitespace content; the
    /// plain-text body only otherwise. Output is in document order. HTML
    /// candidates are never dropped, while plain-text candidates that fail
    /// validation are.
    #[must_use]
    pub fn parse(&self, subject: &str, html: Option<&str>, text: Option<&str>) -> Vec<DealRecord> {
        let hint = subject_route_hint(subject);
        tracing::debug!(
            subject = %truncate(subject, 120),
            hint_origin = ?hint.origin,
            hint_destination = ?hint.destination,
            "parsing deal email"
        );

        let deals = match (non_blank(html), non_blank(text)) {
            (Some(html), _) => parse_html(html, &hint, &self.links),
            (None, Some(text)) => parse_text(text, &hint, &self.text_link_re),
            (None, None) => {
                tracing::debug!("email has no html or text body");
                Vec::new()
            }
        };

        tracing::debug!(deals = deals.len(), "parsed deal email");
        deals
    }
}

/// Parses one email with the default extractor configuration.
///
/// Returns an empty list when neither body has content or nothing in it
/// looks like a deal.
#[must_use]
pub fn parse_deal_email(subject: &str, html: Option<&str>, text: Option<&str>) -> Vec<DealRecord> {
    DEFAULT_EXTRACTOR.parse(subject, html, text)
}

fn non_blank(body: Option<&str>) -> Option<&str> {
    body.filter(|b| !b.trim().is_empty())
}

fn truncate(s: &str, max_chars: usize) -> &str {
    s.char_indices().nth(max_chars).map_or(s, |(idx, _)| &s[..idx])
}
