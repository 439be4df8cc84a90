//! `parse` command: extract deals from one email read from disk.

use std::path::Path;

use anyhow::Context;
use farealert_core::AppConfig;
use farealert_extract::DealExtractor;

/// Read the email bodies, parse them, and print the deals as a JSON array.
///
/// # Errors
///
/// Returns an error if neither body is given, a body file cannot be read, or
/// the configured extractor settings are invalid.
pub(crate) fn run_parse(
    config: &AppConfig,
    subject: &str,
    html_path: Option<&Path>,
    text_path: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    if html_path.is_none() && text_path.is_none() {
        anyhow::bail!("at least one of --html or --text is required");
    }

    let html = html_path.map(read_body).transpose()?;
    let text = text_path.map(read_body).transpose()?;

    let extractor = DealExtractor::new(config.extractor.clone())
        .context("failed to build deal extractor")?;
    let deals = extractor.parse(subject, html.as_deref(), text.as_deref());

    if deals.is_empty() {
        tracing::warn!("email yielded no deals");
    } else {
        tracing::info!(deals = deals.len(), "parsed email");
    }

    crate::print_json(&deals, pretty)
}

fn read_body(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
