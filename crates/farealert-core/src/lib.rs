//! Shared types for the fare-alert pipeline.
//!
//! Holds the [`DealRecord`] produced by the extractor, the ingest envelope
//! that carries deals to storage, deal ranking, and configuration loading.

pub mod app_config;
pub mod config;
pub mod deal;
pub mod email;
pub mod error;
pub mod ranking;

pub use app_config::{
    AppConfig, Environment, ExtractorConfig, DEFAULT_SIBLING_SCAN_LIMIT, DEFAULT_TRACKING_LINK_PREFIX,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use deal::{airport_or_unknown, make_deal_key, DealRecord, DEAL_CURRENCY, UNKNOWN_AIRPORT};
pub use email::{EmailMessage, IngestBatch, IngestedDeal};
pub use error::{ConfigError, DealValidationError};
pub use ranking::{deal_score, discount_percentage, rank_by_discount, rank_by_price, RankMode};
