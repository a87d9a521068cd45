//! The FilterEngine runs named rules against one input table.
//!
//! Unlike a chained pipeline, every rule sees the original table; the
//! engine just collects each rule's output under its name.

use crate::filters::*;
use crate::traits::Filter;
use anyhow::{Context, Result};
use data_loader::{Column, FilmTable};
use rayon::prelude::*;

/// Name prefix of the standard rules' outputs (`filtered_films_1` ...)
pub const STANDARD_OUTPUT_PREFIX: &str = "filtered_films";

/// Runs a set of named rules side by side.
///
/// ## Usage
/// ```ignore
/// let engine = FilterEngine::new()
///     .add_rule("gotham", KeywordFilter::new(Column::Description, "Gotham"))
///     .add_rule("long", DescriptionLengthFilter::new(15));
///
/// let results = engine.apply(&table)?;
/// let gotham = results.get("gotham").unwrap();
/// ```
pub struct FilterEngine {
    rules: Vec<(String, Box<dyn Filter>)>,
}

impl FilterEngine {
    /// Create a new empty FilterEngine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The seven standard rules, named `filtered_films_1` to `filtered_films_7`.
    ///
    /// 1. year <= 2010 and 8.4 <= rating <= 8.7
    /// 2. description contains "Gotham"
    /// 3. actors contain "Leo" and characters contain "Cobb"
    /// 4. cast includes Leonardo DiCaprio or Christian Bale
    /// 5. description longer than 15 words
    /// 6. top-rated film per decade
    /// 7. title contains "The"
    pub fn standard() -> Self {
        let rules: Vec<Box<dyn Filter>> = vec![
            Box::new(YearRatingBandFilter::new(2010, 8.4, 8.7)),
            Box::new(KeywordFilter::new(Column::Description, "Gotham")),
            Box::new(KeywordFilter::new(Column::Actors, "Leo").and(Column::Characters, "Cobb")),
            Box::new(NamedActorFilter::new(["Leonardo DiCaprio", "Christian Bale"])),
            Box::new(DescriptionLengthFilter::new(15)),
            Box::new(BestPerDecadeFilter),
            Box::new(KeywordFilter::new(Column::Title, "The")),
        ];

        Self {
            rules: rules
                .into_iter()
                .enumerate()
                .map(|(i, rule)| (format!("{STANDARD_OUTPUT_PREFIX}_{}", i + 1), rule))
                .collect(),
        }
    }

    /// Add a named rule to the engine (builder pattern).
    ///
    /// # Arguments
    /// * `name` - Name of the rule's output table
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_rule(mut self, name: impl Into<String>, filter: impl Filter + 'static) -> Self {
        self.rules.push((name.into(), Box::new(filter)));
        self
    }

    /// Rule names in registration order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Apply every rule to the same input, one after another.
    ///
    /// Stops at the first failing rule; no partial results are returned.
    pub fn apply(&self, table: &FilmTable) -> Result<RuleResults> {
        let mut entries = Vec::with_capacity(self.rules.len());
        for (name, filter) in &self.rules {
            entries.push((name.clone(), run_rule(name, filter.as_ref(), table)?));
        }
        Ok(RuleResults { entries })
    }

    /// Same contract as [`FilterEngine::apply`], with rules spread over the
    /// rayon pool. Results keep registration order.
    pub fn apply_parallel(&self, table: &FilmTable) -> Result<RuleResults> {
        let entries = self
            .rules
            .par_iter()
            .map(|(name, filter)| -> Result<(String, FilmTable)> {
                Ok((name.clone(), run_rule(name, filter.as_ref(), table)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleResults { entries })
    }
}

fn run_rule(name: &str, filter: &dyn Filter, table: &FilmTable) -> Result<FilmTable> {
    tracing::debug!(
        "Applying rule: {} [{}] (input count: {})",
        name,
        filter.name(),
        table.len()
    );
    let output = filter
        .apply(table)
        .with_context(|| format!("rule {name} ({}) failed", filter.name()))?;
    tracing::debug!("Rule applied: {} (output count: {})", name, output.len());
    Ok(output)
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Output tables keyed by rule name, in the engine's registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleResults {
    entries: Vec<(String, FilmTable)>,
}

impl RuleResults {
    /// Result table of one rule
    pub fn get(&self, name: &str) -> Option<&FilmTable> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, table)| table)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilmTable)> {
        self.entries.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for RuleResults {
    type Item = (String, FilmTable);
    type IntoIter = std::vec::IntoIter<(String, FilmTable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
