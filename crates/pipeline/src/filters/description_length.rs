//! Filter for films with long descriptions.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::FilmTable;

/// Keeps rows whose description has more than `min_words` words.
///
/// Words are whitespace-delimited tokens; punctuation stays attached, so
/// `"dream-sharing technology."` counts as two.
pub struct DescriptionLengthFilter {
    min_words: usize,
}

impl DescriptionLengthFilter {
    /// Create a new DescriptionLengthFilter.
    ///
    /// # Arguments
    /// * `min_words` - Word count to exceed (strictly greater than)
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }
}

impl Filter for DescriptionLengthFilter {
    fn name(&self) -> &str {
        "DescriptionLengthFilter"
    }

    fn apply(&self, table: &FilmTable) -> Result<FilmTable> {
        let keep: Vec<usize> = table
            .records()?
            .iter()
            .filter(|film| film.description.split_whitespace().count() > self.min_words)
            .map(|film| film.position)
            .collect();

        Ok(table.select(&keep))
    }
}
