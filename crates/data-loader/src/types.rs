//! Core domain types for film tables.
//!
//! A film table is kept as raw text cells under a header row, the same shape
//! as the CSV it came from. Typed access goes through [`FilmSchema`] and
//! [`FilmRecord`], which borrow from the table instead of copying it.

use crate::error::{DataLoadError, Result};
use std::fmt;

// =============================================================================
// Columns
// =============================================================================

/// The six columns every film table must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Description,
    Characters,
    Actors,
    Year,
    Rating,
}

impl Column {
    /// Every required column, in canonical header order
    pub const REQUIRED: [Column; 6] = [
        Column::Title,
        Column::Description,
        Column::Characters,
        Column::Actors,
        Column::Year,
        Column::Rating,
    ];

    /// Exact header name of this column
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Description => "description",
            Column::Characters => "characters",
            Column::Actors => "actors",
            Column::Year => "year",
            Column::Rating => "rating",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// FilmTable
// =============================================================================

/// Ordered rows of film data under a header row.
///
/// Cells are stored exactly as read so that writing a subset back out keeps
/// the input's columns, column order and number formatting. Extra columns
/// beyond the required six are carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmTable {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl FilmTable {
    /// Creates an empty table with the given header row
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Creates an empty table with the six required columns in canonical order
    pub fn with_required_columns() -> Self {
        Self::new(Column::REQUIRED.iter().map(|c| c.name()))
    }

    /// Appends a row. The row must have one cell per header.
    pub fn push_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: self.headers.len(),
                found: row.len(),
                // header is line 1, first row is line 2
                line: self.rows.len() + 2,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a required column, or a `MissingColumn` error
    pub fn require(&self, column: Column) -> Result<usize> {
        self.column_index(column.name())
            .ok_or_else(|| DataLoadError::MissingColumn {
                column: column.name().to_string(),
            })
    }

    /// All cells of one column, top to bottom
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Resolves the positions of all six required columns
    pub fn schema(&self) -> Result<FilmSchema> {
        let mut indices = [0usize; 6];
        for column in Column::REQUIRED {
            indices[column.slot()] = self.require(column)?;
        }
        Ok(FilmSchema { indices })
    }
}

// =============================================================================
// Schema and records
// =============================================================================

/// Where each required column lives in a particular table's header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmSchema {
    indices: [usize; 6],
}

impl FilmSchema {
    pub fn index_of(&self, column: Column) -> usize {
        self.indices[column.slot()]
    }

    /// Borrowed view of one row through this schema
    pub fn record<'a>(&self, position: usize, row: &'a [String]) -> FilmRecord<'a> {
        let cell = move |column: Column| row[self.index_of(column)].as_str();
        FilmRecord {
            position,
            title: cell(Column::Title),
            description: cell(Column::Description),
            characters: cell(Column::Characters),
            actors: cell(Column::Actors),
            year: cell(Column::Year),
            rating: cell(Column::Rating),
        }
    }
}

/// One film, borrowed from a [`FilmTable`] row.
///
/// Text fields are exposed as-is. `year` and `rating` stay raw until asked
/// for, so rules that never compare them never fail on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmRecord<'a> {
    /// 0-based row position in the source table
    pub position: usize,
    pub title: &'a str,
    pub description: &'a str,
    /// Comma-separated character names, treated as opaque text
    pub characters: &'a str,
    /// Actor names separated by `", "`
    pub actors: &'a str,
    year: &'a str,
    rating: &'a str,
}

impl<'a> FilmRecord<'a> {
    /// Release year as an integer
    pub fn year(&self) -> Result<i64> {
        self.year
            .trim()
            .parse::<i64>()
            .map_err(|_| self.invalid(Column::Year, self.year))
    }

    /// Rating as a float. NaN is rejected along with non-numeric text.
    pub fn rating(&self) -> Result<f64> {
        match self.rating.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(self.invalid(Column::Rating, self.rating)),
        }
    }

    /// Raw text of the `year` cell.
    ///
    /// Text filters search numeric columns through this, so a keyword
    /// search on `year` never fails on a non-numeric cell.
    pub fn raw_year(&self) -> &'a str {
        self.year
    }

    /// Raw text of the `rating` cell, searched as-is like [`FilmRecord::raw_year`]
    pub fn raw_rating(&self) -> &'a str {
        self.rating
    }

    fn invalid(&self, column: Column, value: &str) -> DataLoadError {
        DataLoadError::InvalidValue {
            field: column.name().to_string(),
            row: self.position,
            value: value.to_string(),
        }
    }
}
