//! Block parser for `;;StartList` start-list exports
//!
//! Splits a raw text stream into event blocks and each block into header and
//! data lines, producing a rectangular table of athlete rows tagged with the
//! metadata of the block they came from.
//!
//! ## Architecture
//!
//! - [`parser`] - Line state machine and file/reader entry points
//! - [`row_schema`] - Typed positional column schemas shared with result files
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackmeet_processor::app::services::block_parser::BlockParser;
//!
//! # fn example() -> trackmeet_processor::Result<()> {
//! let parser = BlockParser::default();
//! let result = parser.parse_file(std::path::Path::new("start_list.txt"))?;
//!
//! println!("Parsed {} rows from {} blocks",
//!          result.stats.data_rows,
//!          result.stats.blocks);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod row_schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{BlockParser, LineState, parse_block_header};
pub use row_schema::{AthleteRow, Column, RowSchema};
pub use stats::{ParseResult, ParseStats};
