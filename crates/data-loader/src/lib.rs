//! # Data Loader Crate
//!
//! This crate handles loading film tables from CSV, giving typed access to
//! their rows, and writing derived tables back out.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Column, FilmTable, FilmSchema, FilmRecord)
//! - **table**: Derivations that build new tables from an existing one
//! - **parser**: Parse CSV files into a FilmTable
//! - **writer**: Write a FilmTable as CSV next to its input
//! - **error**: Error types for loading and writing
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{parser, writer};
//! use std::path::Path;
//!
//! let input = Path::new("data/films.csv");
//! let table = parser::parse_films(input)?;
//!
//! let first_two = table.select(&[0, 1]);
//! writer::write_films(&first_two, &writer::output_path(input, "first_two"))?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod table;
pub mod parser;
pub mod writer;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{parse_films, parse_films_from_reader};
pub use types::{Column, FilmRecord, FilmSchema, FilmTable};
pub use writer::{output_path, write_films};
