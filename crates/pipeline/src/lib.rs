//! Pipeline for deriving filtered film tables.
//!
//! This crate provides:
//! - Filter trait and the rule implementations
//! - FilterEngine for running named rules side by side
//! - `filter_films` to go from an input CSV to the seven output files
//!
//! ## Architecture
//! A run goes through three stages:
//! 1. The input CSV is loaded into a FilmTable (data-loader)
//! 2. Every rule is applied to that same table; the first failure aborts
//! 3. Only once all rules succeeded are the results written to disk
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_films, FilterOptions};
//! use std::path::Path;
//!
//! let results = filter_films(Path::new("data/films.csv"), &FilterOptions::default())?;
//! let matrix_band = results.get("filtered_films_1").unwrap();
//! ```

pub mod traits;
pub mod filters;
pub mod filter_engine;
pub mod output;

// Re-export main types
pub use traits::Filter;
pub use filter_engine::{FilterEngine, RuleResults};
pub use output::write_results;

use anyhow::{Context, Result};
use data_loader::parse_films;
use std::path::Path;
use tracing::info;

/// Knobs for a `filter_films` run
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Evaluate the rules on the rayon pool instead of one by one
    pub parallel: bool,
}

/// Load `input_path`, run the standard rules and write
/// `filtered_films_1.csv` ... `filtered_films_7.csv` beside it.
///
/// Nothing is written unless every rule succeeds.
pub fn filter_films(input_path: &Path, options: &FilterOptions) -> Result<RuleResults> {
    let table = parse_films(input_path)
        .with_context(|| format!("failed to load {}", input_path.display()))?;

    let engine = FilterEngine::standard();
    let results = if options.parallel {
        engine.apply_parallel(&table)?
    } else {
        engine.apply(&table)?
    };

    let written = write_results(&results, input_path)?;
    info!("Wrote {} output files", written.len());
    Ok(results)
}
