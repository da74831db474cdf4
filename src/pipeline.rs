//! Load, normalize, persist and render, in that order.
//!
//! Each step either succeeds or aborts the run. Nothing is rolled back: if
//! writing the SSH config fails, the CSV has already been rewritten.

use crate::store::Store;
use anyhow::{Context, Result};
use config::Paths;
use hosts::{Decoder, HostRecord, Normalized, NumericPolicy};
use std::path::Path;
use tracing::{debug, info};

/// Record counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Data rows decoded from the CSV.
    pub read: usize,
    /// Records left after normalization.
    pub kept: usize,
}

/// Runs the pipeline against `store`.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read or decoded, or if either
/// output cannot be written.
pub fn run(store: &mut impl Store, paths: &Paths, policy: NumericPolicy) -> Result<Summary> {
    let raw = store
        .read(&paths.csv)
        .with_context(|| format!("failed to read {}", paths.csv.display()))?;
    debug!(path = %paths.csv.display(), bytes = raw.len(), "read hosts CSV");

    let records = Decoder::new()
        .numeric_policy(policy)
        .decode(&raw)
        .with_context(|| format!("failed to decode {}", paths.csv.display()))?;
    let read = records.len();

    let normalized = hosts::dedupe(hosts::sort(records));
    let kept = normalized.len();
    debug!(read, kept, "normalized host records");

    store
        .write(&paths.csv, &hosts::encode(&normalized))
        .with_context(|| format!("failed to write {}", paths.csv.display()))?;
    debug!(path = %paths.csv.display(), "rewrote canonical CSV");

    let rendered = match &paths.identity_dir {
        Some(dir) => ssh::render_config(&resolve_identities(&normalized, dir)),
        None => ssh::render_config(&normalized),
    };

    store
        .write(&paths.ssh_config, rendered.as_bytes())
        .with_context(|| format!("failed to write {}", paths.ssh_config.display()))?;

    info!(
        read,
        kept,
        ssh_config = %paths.ssh_config.display(),
        "generated SSH config"
    );

    Ok(Summary { read, kept })
}

/// Joins relative identity files onto `dir`; absolute ones are kept as is.
fn resolve_identities(records: &Normalized, dir: &Path) -> Vec<HostRecord> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            if !record.identity_file.is_empty() {
                record.identity_file = dir
                    .join(&record.identity_file)
                    .to_string_lossy()
                    .into_owned();
            }
            record
        })
        .collect()
}
