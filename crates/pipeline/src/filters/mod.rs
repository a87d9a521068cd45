//! Filter implementations for the engine.
//!
//! Each filter is one rule; the engine runs them side by side against the
//! same input table.

pub mod best_per_decade;
pub mod description_length;
pub mod keyword;
pub mod named_actors;
pub mod year_rating_band;

// Re-export for convenience
pub use best_per_decade::BestPerDecadeFilter;
pub use description_length::DescriptionLengthFilter;
pub use keyword::KeywordFilter;
pub use named_actors::NamedActorFilter;
pub use year_rating_band::YearRatingBandFilter;
