use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Shape violations found by [`crate::DealRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealValidationError {
    #[error("{field} must be at least 2 characters, got {value:?}")]
    AirportTooShort { field: &'static str, value: String },

    #[error("price must be a positive integer")]
    NonPositivePrice,

    #[error("unsupported currency {0:?}")]
    Currency(String),

    #[error("link is neither empty nor a valid URL: {link:?} ({reason})")]
    InvalidLink { link: String, reason: String },
}
