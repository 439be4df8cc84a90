use farealert_core::DealValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid extractor config: {reason}")]
    InvalidConfig { reason: String },

    #[error("pattern build error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("booking link {link:?} is not valid percent-encoded UTF-8: {source}")]
    LinkDecode {
        link: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("deal failed validation: {0}")]
    Validation(#[from] DealValidationError),
}
