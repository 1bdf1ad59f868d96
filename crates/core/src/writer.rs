use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::config::ExtractOptions;
use crate::error::ExtractError;
use crate::path::{clean_path, resolve_output_path};
use crate::sourcemap::SourceMapRecord;

/// Counts from one pass over a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Sources reported as found.
    pub found: usize,
    /// Files actually written; always zero in a dry run.
    pub written: usize,
}

/// Ensure the given output directory exists. Creates missing parent directories as needed.
///
/// Returns an `AlreadyExists` error if something other than a directory sits at the path.
pub fn ensure_output_dir<P: AsRef<Path>>(output_path: P) -> io::Result<()> {
    let path = output_path.as_ref();
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("{} exists but is not a directory", path.display()),
            ));
        }
        return Ok(());
    }
    fs::create_dir_all(path)
}

/// Walk `record.sources` in order, writing each body under the destination and
/// reporting every resolved path on `out`.
///
/// The first failure stops the walk. Files written before it stay on disk.
pub fn write_sources<W: Write>(
    record: &SourceMapRecord,
    resource: &str,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<ExtractSummary, ExtractError> {
    let mut summary = ExtractSummary::default();

    for (index, source) in record.sources.iter().enumerate() {
        let target = resolve_output_path(&options.destination, &clean_path(source));

        if options.write {
            let content = record
                .sources_content
                .get(index)
                .and_then(Option::as_deref)
                .ok_or_else(|| ExtractError::MissingContent {
                    resource: resource.to_string(),
                    source_path: source.clone(),
                    index,
                })?;

            write_one(&target, content).map_err(|e| ExtractError::Write {
                resource: resource.to_string(),
                source_path: source.clone(),
                target: target.clone(),
                source: e,
            })?;
            log::debug!("wrote {} bytes to {}", content.len(), target.display());
            summary.written += 1;
        }

        writeln!(out, "[{resource}] File found: {}", target.display())?;
        summary.found += 1;
    }

    Ok(summary)
}

fn write_one(target: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_output_dir(parent)?;
    }
    fs::write(target, content.as_bytes())
}
