//! Batch ingest: parse many fetched emails and tag each deal with its
//! provenance.

use farealert_core::{EmailMessage, IngestBatch, IngestedDeal};

use crate::extractor::DealExtractor;

/// Parses every email in `emails` and concatenates the annotated deals in
/// input order.
///
/// An email that yields no deals is logged at `warn` and otherwise skipped;
/// deciding whether that matters is left to the caller.
#[must_use]
pub fn ingest_batch(extractor: &DealExtractor, emails: &[EmailMessage], source: &str) -> IngestBatch {
    let mut batch = IngestBatch::default();

    for email in emails {
        let deals = extractor.parse(&email.subject, email.html.as_deref(), email.text.as_deref());
        batch.processed_emails += 1;

        if deals.is_empty() {
            tracing::warn!(
                message_id = %email.message_id,
                has_html = email.html.is_some(),
                has_text = email.text.is_some(),
                "email yielded no deals"
            );
            continue;
        }

        tracing::info!(
            message_id = %email.message_id,
            deals = deals.len(),
            "parsed email"
        );
        batch.ingested_count += deals.len();
        batch
            .deals
            .extend(deals.into_iter().map(|deal| IngestedDeal::new(deal, email, source)));
    }

    tracing::info!(
        processed_emails = batch.processed_emails,
        ingested_count = batch.ingested_count,
        source,
        "ingest batch complete"
    );
    batch
}
