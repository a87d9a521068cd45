//! Deriving new tables from an existing one.
//!
//! Nothing here mutates `self`: every derivation returns a fresh
//! [`FilmTable`], so several rules can work from the same input without
//! seeing each other's changes.

use crate::error::{DataLoadError, Result};
use crate::types::*;

impl FilmTable {
    /// Typed views over every row.
    ///
    /// Fails with `MissingColumn` before looking at any row if a required
    /// column is absent.
    pub fn records(&self) -> Result<Vec<FilmRecord<'_>>> {
        let schema = self.schema()?;
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| schema.record(position, row))
            .collect())
    }

    /// New table with the same header and only the given rows, in the
    /// order the positions are listed.
    ///
    /// Positions past the end of the table are ignored.
    pub fn select(&self, positions: &[usize]) -> FilmTable {
        FilmTable {
            headers: self.headers.clone(),
            rows: positions
                .iter()
                .filter_map(|&p| self.rows.get(p).cloned())
                .collect(),
        }
    }

    /// New table with one more column on the right.
    ///
    /// If a column called `name` already exists its cells are replaced in
    /// place instead, keeping the header unique.
    pub fn with_column<S: Into<String>>(&self, name: &str, values: Vec<S>) -> Result<FilmTable> {
        if values.len() != self.rows.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: self.rows.len(),
                found: values.len(),
                line: 0,
            });
        }

        let mut derived = self.clone();
        let values = values.into_iter().map(Into::into);
        match derived.column_index(name) {
            Some(idx) => {
                for (row, value) in derived.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                derived.headers.push(name.to_string());
                for (row, value) in derived.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(derived)
    }
}
