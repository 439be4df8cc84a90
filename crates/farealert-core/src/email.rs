//! Ingest envelope: the emails handed to the extractor and the annotated
//! deals handed on to storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deal::{make_deal_key, DealRecord};

/// One fetched alert email, as the mail-fetching service supplies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub message_id: String,
    pub subject: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// A parsed deal tagged with the email it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestedDeal {
    /// [`make_deal_key`] of the deal; the storage upsert key.
    pub id: String,
    #[serde(flatten)]
    pub deal: DealRecord,
    pub message_id: String,
    pub subject: String,
    /// Where the email was fetched from, e.g. `"gmail"`.
    pub source: String,
    pub received_at: DateTime<Utc>,
}

impl IngestedDeal {
    #[must_use]
    pub fn new(deal: DealRecord, email: &EmailMessage, source: &str) -> Self {
        Self {
            id: make_deal_key(&deal),
            deal,
            message_id: email.message_id.clone(),
            subject: email.subject.clone(),
            source: source.to_string(),
            received_at: email.received_at,
        }
    }
}

impl AsRef<DealRecord> for IngestedDeal {
    fn as_ref(&self) -> &DealRecord {
        &self.deal
    }
}

/// Outcome of parsing a batch of emails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestBatch {
    pub processed_emails: usize,
    pub ingested_count: usize,
    /// Deals from every email, concatenated in input order.
    pub deals: Vec<IngestedDeal>,
}
