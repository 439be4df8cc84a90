#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Default host prefix of the alert service's click-tracking links.
pub const DEFAULT_TRACKING_LINK_PREFIX: &str = "https://c.gle/";

/// Default number of sibling rows scanned for a booking link after a card.
pub const DEFAULT_SIBLING_SCAN_LIMIT: usize = 6;

/// Tunables for the deal extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Booking links are recognized by `href` containing this prefix.
    pub tracking_link_prefix: String,
    /// Sibling rows scanned after a card that has no link of its own.
    pub sibling_scan_limit: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            tracking_link_prefix: DEFAULT_TRACKING_LINK_PREFIX.to_string(),
            sibling_scan_limit: DEFAULT_SIBLING_SCAN_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Provenance label written onto every ingested deal.
    pub source_label: String,
    /// Maximum deals kept when a batch is ranked.
    pub rank_limit: usize,
    pub extractor: ExtractorConfig,
}
