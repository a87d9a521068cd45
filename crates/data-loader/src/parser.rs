//! Parser for film CSV files.
//!
//! Expected layout: a header row naming at least the six required columns
//! (`title, description, characters, actors, year, rating`), then one film
//! per record. Quoted fields may contain commas, as in
//! `"Andy Dufresne, Ellis Boyd 'Red' Redding"`.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load a film table from a CSV file.
///
/// The header is checked for the required columns before any record is
/// read, so a structurally broken file fails without partial work.
pub fn parse_films(path: &Path) -> Result<FilmTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    info!("Loading films from {}", path.display());
    let table = parse_films_from_reader(file)?;
    info!("Loaded {} films", table.len());
    Ok(table)
}

/// Parse CSV text from any reader into a film table.
pub fn parse_films_from_reader<R: Read>(reader: R) -> Result<FilmTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = FilmTable::new(headers);
    table.schema()?;

    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(table.len() + 2);

        if record.len() != table.headers().len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: table.headers().len(),
                found: record.len(),
                line,
            });
        }
        table.push_row(record.iter())?;
    }

    debug!(
        "Parsed {} rows across {} columns",
        table.len(),
        table.headers().len()
    );
    Ok(table)
}
