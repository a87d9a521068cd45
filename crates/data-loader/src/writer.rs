//! Writing film tables back to CSV.
//!
//! Output keeps the table's header and raw cells verbatim, so a subset of
//! an input file looks exactly like the lines it was cut from.

use crate::error::Result;
use crate::types::FilmTable;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of a named output next to the input file.
///
/// Example: `data/films.csv` + `filtered_films_1` -> `data/filtered_films_1.csv`
pub fn output_path(input_path: &Path, name: &str) -> PathBuf {
    let dir = input_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{name}.csv"))
}

/// Write a table to a CSV file, replacing any existing file.
///
/// The header row is always written, even when the table has no rows.
pub fn write_films(table: &FilmTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_films_to_writer(table, file)?;
    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Write a table as CSV into any writer.
pub fn write_films_to_writer<W: Write>(table: &FilmTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
