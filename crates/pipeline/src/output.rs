//! Persisting rule results next to the input file.

use crate::filter_engine::RuleResults;
use anyhow::{Context, Result};
use data_loader::writer::{output_path, write_films};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write every result table to `<input dir>/<rule name>.csv`.
///
/// Files are written in rule order. An I/O failure stops the remaining
/// writes and is returned with the offending path attached.
///
/// # Returns
/// The written paths, in rule order
pub fn write_results(results: &RuleResults, input_path: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(results.len());
    for (name, table) in results.iter() {
        let path = output_path(input_path, name);
        write_films(table, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("{}: {} rows -> {}", name, table.len(), path.display());
        written.push(path);
    }
    Ok(written)
}
