//! Parser for single-event result files
//!
//! A result file describes one event round: a metadata row followed by
//! quote-aware CSV data rows in either the standard or the combined-event
//! layout.
//!
//! ## Architecture
//!
//! - [`metadata_row`] - Metadata row fields and event header derivation
//! - [`parser`] - File/reader entry points and row filtering
//! - [`rows`] - Conversion of result rows into scoring entrants

pub mod metadata_row;
pub mod parser;
pub mod rows;

#[cfg(test)]
pub mod tests;

pub use metadata_row::ResultMetadata;
pub use parser::{ParsedResultFile, ResultFileParser};
pub use rows::{entrant_from_result_row, fallback_athlete_id};
