//! Parsing statistics and result structures for block parsing

use super::row_schema::AthleteRow;
use crate::app::models::EventBlockHeader;
use serde::{Deserialize, Serialize};

/// Parsed blocks and their rectangular data rows
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// One header per event block, in file order
    pub blocks: Vec<EventBlockHeader>,

    /// Retained data rows; `AthleteRow::block` indexes into `blocks`
    pub rows: Vec<AthleteRow>,

    pub stats: ParseStats,
}

impl ParseResult {
    /// Header of the block a row belongs to
    pub fn header_of(&self, row: &AthleteRow) -> Option<&EventBlockHeader> {
        self.blocks.get(row.block)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines read from the source
    pub total_lines: usize,

    /// Block-start markers seen
    pub blocks: usize,

    /// Data rows retained
    pub data_rows: usize,

    /// Data lines dropped (non-numeric place or skip code)
    pub rows_skipped: usize,

    /// Non-empty lines before the first block marker
    pub orphan_lines: usize,

    /// Widest retained data row, used as the table width
    pub max_columns: usize,

    /// Non-fatal anomalies for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data lines that were retained, as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.data_rows + self.rows_skipped;
        if candidates == 0 {
            0.0
        } else {
            (self.data_rows as f64 / candidates as f64) * 100.0
        }
    }
}
