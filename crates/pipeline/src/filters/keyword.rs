//! Case-insensitive substring filters over text columns.
//!
//! Matching is lowercase-and-contains: no word boundaries, so `"The"`
//! matches `"Theater"` and `"Leo"` matches `"Leonardo"`.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Column, FilmRecord, FilmTable};

/// Keeps rows where every clause's column contains its keyword.
///
/// ## Usage
/// ```ignore
/// // description mentions Gotham
/// let gotham = KeywordFilter::new(Column::Description, "Gotham");
///
/// // both clauses must hold
/// let cobb = KeywordFilter::new(Column::Actors, "Leo").and(Column::Characters, "Cobb");
/// ```
pub struct KeywordFilter {
    name: String,
    clauses: Vec<(Column, String)>,
}

impl KeywordFilter {
    /// Create a filter with a single clause.
    pub fn new(column: Column, keyword: &str) -> Self {
        Self {
            name: format!("KeywordFilter({column}~{keyword})"),
            clauses: vec![(column, keyword.to_lowercase())],
        }
    }

    /// Add another clause; a row must satisfy all of them (builder pattern).
    pub fn and(mut self, column: Column, keyword: &str) -> Self {
        self.name = format!("{}&({column}~{keyword})", self.name);
        self.clauses.push((column, keyword.to_lowercase()));
        self
    }

    fn matches(&self, film: &FilmRecord<'_>) -> bool {
        self.clauses
            .iter()
            .all(|(column, needle)| text_of(film, *column).to_lowercase().contains(needle.as_str()))
    }
}

/// Text of a string column; numeric columns are searched as their raw text
fn text_of<'a>(film: &FilmRecord<'a>, column: Column) -> &'a str {
    match column {
        Column::Title => film.title,
        Column::Description => film.description,
        Column::Characters => film.characters,
        Column::Actors => film.actors,
        Column::Year => film.raw_year(),
        Column::Rating => film.raw_rating(),
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, table: &FilmTable) -> Result<FilmTable> {
        let keep: Vec<usize> = table
            .records()?
            .iter()
            .filter(|film| self.matches(film))
            .map(|film| film.position)
            .collect();

        Ok(table.select(&keep))
    }
}
