//! `ingest` command: parse a batch of fetched emails and rank the result.

use std::path::Path;

use anyhow::Context;
use farealert_core::{AppConfig, EmailMessage, IngestBatch, RankMode};
use farealert_extract::{ingest_batch, DealExtractor};

/// Parse every email in the JSON file at `path`, rank the combined deals,
/// and print the batch summary with the top `limit` deals.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// emails, or if the configured extractor settings are invalid. Emails that
/// yield no deals are logged, not propagated.
pub(crate) fn run_ingest(
    config: &AppConfig,
    path: &Path,
    mode: RankMode,
    limit: usize,
    source: &str,
    pretty: bool,
) -> anyhow::Result<()> {
    let emails = load_emails(path)?;
    tracing::info!(path = %path.display(), emails = emails.len(), "loaded email batch");

    let extractor = DealExtractor::new(config.extractor.clone())
        .context("failed to build deal extractor")?;
    let batch = ingest_batch(&extractor, &emails, source);

    let ranked = IngestBatch {
        deals: mode.rank(batch.deals, limit),
        ..batch
    };
    tracing::info!(
        ?mode,
        limit,
        shown = ranked.deals.len(),
        ingested = ranked.ingested_count,
        "ranked deals"
    );

    crate::print_json(&ranked, pretty)
}

pub(crate) fn load_emails(path: &Path) -> anyhow::Result<Vec<EmailMessage>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of emails", path.display()))
}
