//! Filter for films featuring at least one actor from an allow-list.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::FilmTable;
use std::collections::HashSet;

/// Separator between names in the `actors` column
pub const ACTOR_SEPARATOR: &str = ", ";

/// Keeps rows whose cast includes one of the given actors.
///
/// ## Algorithm
/// Splits `actors` on `", "` and compares each piece against the
/// allow-list with exact, case-sensitive equality. A name containing an
/// embedded `", "` is split like any other; that limitation is kept as is.
pub struct NamedActorFilter {
    actors: HashSet<String>,
}

impl NamedActorFilter {
    /// Create a new NamedActorFilter.
    ///
    /// # Arguments
    /// * `actors` - Full actor names to look for
    pub fn new<I, S>(actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actors: actors.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for NamedActorFilter {
    fn name(&self) -> &str {
        "NamedActorFilter"
    }

    fn apply(&self, table: &FilmTable) -> Result<FilmTable> {
        let keep: Vec<usize> = table
            .records()?
            .iter()
            .filter(|film| {
                film.actors
                    .split(ACTOR_SEPARATOR)
                    .any(|actor| self.actors.contains(actor))
            })
            .map(|film| film.position)
            .collect();

        Ok(table.select(&keep))
    }
}
