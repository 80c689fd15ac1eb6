//! Flat export of result trees and standings
//!
//! Nested results are flattened into one row per scored record so they can
//! be written as CSV or Parquet through polars; whole reports are written as
//! JSON.
//!
//! ## Architecture
//!
//! - [`flatten`] - Result tree and standings to polars `DataFrame`
//! - [`writer`] - CSV, Parquet and JSON file writers

pub mod flatten;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use flatten::{results_frame, standings_frame};
pub use writer::{write_frame, write_json};
