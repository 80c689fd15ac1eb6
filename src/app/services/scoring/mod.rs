//! Ranking and scoring of event groups
//!
//! Turns the entrants of one event into scored records: merit-ordered sort,
//! duplicate removal, competition ("min") ranking and tie-aware splitting of
//! the fixed points table. Result ingestion additionally folds marks into a
//! running season-best store.
//!
//! ## Architecture
//!
//! - [`ranking`] - Entrant model, merit sort, competition ranking, [`EventScorer`]
//! - [`deduplication`] - Removal of duplicate entrant rows
//! - [`points`] - Points table lookup and tie splitting
//! - [`season_best`] - Monotonic season-best store and document seeding
//! - [`standings`] - Per-gender team totals

pub mod deduplication;
pub mod points;
pub mod ranking;
pub mod season_best;
pub mod standings;

#[cfg(test)]
pub mod tests;

pub use deduplication::{DedupeKey, dedupe_entrants};
pub use points::{points_for_place, split_points};
pub use ranking::{Entrant, EventScorer, competition_ranks, sort_by_merit};
pub use season_best::{
    InMemorySeasonBestStore, SeasonBestKey, SeasonBestStore, fold_season_bests, seed_from_document,
};
pub use standings::compute_standings;
