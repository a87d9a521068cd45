//! Filter for older films inside a rating band.
//!
//! Keeps films released up to a given year whose rating falls within a
//! closed interval.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::FilmTable;

/// Keeps rows with `year <= max_year` and `min_rating <= rating <= max_rating`.
///
/// ## Algorithm
/// 1. Parse `year` and `rating` for every row; any invalid cell fails the
///    whole filter before a single comparison is made
/// 2. Keep rows inside the band, bounds inclusive
pub struct YearRatingBandFilter {
    max_year: i64,
    min_rating: f64,
    max_rating: f64,
}

impl YearRatingBandFilter {
    /// Create a new YearRatingBandFilter.
    ///
    /// # Arguments
    /// * `max_year` - Latest release year kept (inclusive)
    /// * `min_rating` - Lower rating bound (inclusive)
    /// * `max_rating` - Upper rating bound (inclusive)
    pub fn new(max_year: i64, min_rating: f64, max_rating: f64) -> Self {
        Self {
            max_year,
            min_rating,
            max_rating,
        }
    }
}

impl Filter for YearRatingBandFilter {
    fn name(&self) -> &str {
        "YearRatingBandFilter"
    }

    fn apply(&self, table: &FilmTable) -> Result<FilmTable> {
        let parsed = table
            .records()?
            .iter()
            .map(|film| -> data_loader::Result<(usize, i64, f64)> {
                Ok((film.position, film.year()?, film.rating()?))
            })
            .collect::<data_loader::Result<Vec<_>>>()?;

        let keep: Vec<usize> = parsed
            .into_iter()
            .filter(|&(_, year, rating)| {
                year <= self.max_year && rating >= self.min_rating && rating <= self.max_rating
            })
            .map(|(position, _, _)| position)
            .collect();

        Ok(table.select(&keep))
    }
}
