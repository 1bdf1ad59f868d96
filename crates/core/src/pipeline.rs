use std::io::Write;

use crate::config::{ExtractOptions, FetchConfig};
use crate::error::ExtractError;
use crate::loader::{load, Resource};
use crate::sourcemap::{normalize, verify};
use crate::writer::{write_sources, ExtractSummary};

/// Run the whole extraction for one resource: load, verify, normalize, write.
///
/// Report lines go to `out`. Nothing is written to disk unless the map verifies.
pub async fn run<W: Write>(
    resource: &Resource,
    options: &ExtractOptions,
    fetch: &FetchConfig,
    out: &mut W,
) -> Result<ExtractSummary, ExtractError> {
    let label = resource.to_string();
    writeln!(out, "[{label}] Parsing {} resource", resource.kind())?;

    let json = load(resource, fetch).await?;
    if !verify(&json) {
        log::debug!("{label} lacks one of the required source map keys");
        return Err(ExtractError::Validation { resource: label });
    }

    let record = normalize(&json).map_err(|reason| ExtractError::Malformed {
        resource: label.clone(),
        reason,
    })?;
    writeln!(
        out,
        "[{label}] Version {} source map with {} sources",
        record.version,
        record.sources.len()
    )?;
    if record.sources.len() != record.sources_content.len() {
        log::warn!(
            "{label} declares {} sources but {} sourcesContent entries",
            record.sources.len(),
            record.sources_content.len()
        );
    }

    let summary = write_sources(&record, &label, options, out)?;
    log::info!(
        "{label}: {} sources found, {} written to {}",
        summary.found,
        summary.written,
        options.destination.display()
    );
    Ok(summary)
}
