//! Aggregation picking the top-rated film of each decade.
//!
//! The `decade` column only exists on this filter's output. The input table
//! is never annotated, so other rules cannot observe it.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::FilmTable;
use std::collections::BTreeMap;
use tracing::debug;

/// Header of the derived column added to the output
pub const DECADE_COLUMN: &str = "decade";

/// `floor(year / 10) * 10`, e.g. 1994 -> 1990, -5 -> -10
pub fn decade_of(year: i64) -> i64 {
    year.div_euclid(10) * 10
}

/// Keeps one row per decade: the one with the highest rating.
///
/// ## Algorithm
/// 1. Parse `year` and `rating` for every row (invalid cells fail the filter)
/// 2. Walk rows in table order, tracking the best row per decade; a later
///    row replaces the current best only with a strictly higher rating, so
///    ties go to the earliest row
/// 3. Emit winners by ascending decade with a trailing `decade` column
pub struct BestPerDecadeFilter;

impl Filter for BestPerDecadeFilter {
    fn name(&self) -> &str {
        "BestPerDecadeFilter"
    }

    fn apply(&self, table: &FilmTable) -> Result<FilmTable> {
        let parsed = table
            .records()?
            .iter()
            .map(|film| -> data_loader::Result<(usize, i64, f64)> {
                Ok((film.position, decade_of(film.year()?), film.rating()?))
            })
            .collect::<data_loader::Result<Vec<_>>>()?;

        // decade -> (position, rating) of the best row so far
        let mut best: BTreeMap<i64, (usize, f64)> = BTreeMap::new();
        for (position, decade, rating) in parsed {
            best.entry(decade)
                .and_modify(|current| {
                    if rating > current.1 {
                        *current = (position, rating);
                    }
                })
                .or_insert((position, rating));
        }

        debug!("{} distinct decades", best.len());

        let positions: Vec<usize> = best.values().map(|&(position, _)| position).collect();
        let decades: Vec<String> = best.keys().map(|decade| decade.to_string()).collect();

        Ok(table.select(&positions).with_column(DECADE_COLUMN, decades)?)
    }
}
