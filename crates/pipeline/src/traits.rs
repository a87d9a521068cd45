//! Core traits for the filter engine.
//!
//! This module defines the Filter trait that every rule implements.

use anyhow::Result;
use data_loader::FilmTable;

/// Core trait for a rule over a film table.
///
/// All rules must implement this trait to be registered with the FilterEngine.
///
/// ## Design Note
/// - `Send + Sync` lets the engine evaluate rules on the rayon pool
/// - Filters borrow the input table and return a new one, so every rule
///   sees the same unmodified input
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a table.
    ///
    /// # Arguments
    /// * `table` - The input table (never modified)
    ///
    /// # Returns
    /// * `Ok(FilmTable)` - The rows this filter keeps, under the input's header
    /// * `Err` - If a required column is missing or a numeric cell is invalid
    fn apply(&self, table: &FilmTable) -> Result<FilmTable>;
}
