//! Deal extraction from fare-alert emails.
//!
//! Turns one alert email (subject plus HTML and/or plain-text body) into an
//! ordered list of [`farealert_core::DealRecord`]s. The HTML path locates
//! each deal "card" by its date-pair cell and extracts price, discount,
//! flight details, and booking link from within that card; the plain-text
//! path is a regex fallback for emails without HTML.

mod card;
mod dom;
pub mod encoding;
pub mod error;
pub mod extractor;
pub mod flight;
mod html;
pub mod ingest;
mod link;
mod price;
pub mod subject;
mod text;

pub use encoding::maybe_decode_quoted_printable;
pub use error::ExtractError;
pub use extractor::{parse_deal_email, DealExtractor};
pub use flight::{parse_flight_blob, FlightDetails};
pub use ingest::ingest_batch;
pub use subject::{subject_route_hint, SubjectHint};
