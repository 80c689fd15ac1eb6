//! Core block parser implementation
//!
//! Lines are fed one at a time through a three-state machine:
//!
//! ```text
//! SeekingMarker --marker--> HeaderLine --(header_block_size - 1 lines)--> DataLine
//!       ^                      |  ^                                          |
//!       |                      |  +------------------marker------------------+
//!  (start of file)             +-- first line after the marker is metadata
//! ```
//!
//! Rows are buffered unpadded while streaming and padded to the global
//! maximum width once the whole input has been read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::row_schema::AthleteRow;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::EventBlockHeader;
use crate::app::services::metadata::{
    extract_description, normalize_whitespace, strip_leading_zeros,
};
use crate::config::ParsingConfig;
use crate::{Error, Result};

/// Position of the parser relative to the current block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Before the first block marker
    SeekingMarker,
    /// Inside a block header; counts header lines consumed after the marker
    HeaderLine { consumed: usize },
    /// Inside a block body
    DataLine,
}

/// Start-list block parser
#[derive(Debug, Clone)]
pub struct BlockParser {
    marker: String,
    header_block_size: usize,
    skip_codes: Vec<String>,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

impl BlockParser {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            marker: config.block_marker.clone(),
            header_block_size: config.header_block_size,
            skip_codes: config.skip_codes.clone(),
        }
    }

    /// Parse a start-list file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing start list: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        self.parse_reader(BufReader::new(file))
    }

    /// Parse any buffered reader, consuming it exactly once
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut accumulator = BlockAccumulator::new(self);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(format!("Failed to read line {}", index + 1), e))?;
            accumulator.feed(&line)?;
        }
        Ok(accumulator.finish())
    }

    /// Parse already-decoded lines
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accumulator = BlockAccumulator::new(self);
        for line in lines {
            accumulator.feed(line.as_ref())?;
        }
        Ok(accumulator.finish())
    }

    fn is_marker(&self, line: &str) -> bool {
        normalize_whitespace(line).starts_with(&self.marker)
    }

    fn is_skip_code(&self, field: &str) -> bool {
        self.skip_codes.iter().any(|code| code == field)
    }
}

/// Whether a first field is a numeric place
fn is_place(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

/// Parse the metadata line that follows a block marker
///
/// Field 0 is the event number, field 2 the free-text description.
pub fn parse_block_header(line: &str) -> Result<EventBlockHeader> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();

    if fields.len() < 3 {
        return Err(Error::validation(format!(
            "Block metadata line has {} field(s), expected at least 3 (event number, _, description); parsed: {:?}",
            fields.len(),
            fields
        )));
    }

    let description = extract_description(fields[2]);

    Ok(EventBlockHeader {
        event_num: strip_leading_zeros(fields[0]),
        event_name: description.event_name,
        gender: description.gender,
        ..EventBlockHeader::default()
    })
}

/// Streaming state for one parse
struct BlockAccumulator<'a> {
    parser: &'a BlockParser,
    state: LineState,
    blocks: Vec<EventBlockHeader>,
    /// Current block index and unpadded fields
    pending: Vec<(usize, Vec<String>)>,
    stats: ParseStats,
}

impl<'a> BlockAccumulator<'a> {
    fn new(parser: &'a BlockParser) -> Self {
        Self {
            parser,
            state: LineState::SeekingMarker,
            blocks: Vec::new(),
            pending: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    fn feed(&mut self, raw_line: &str) -> Result<()> {
        self.stats.total_lines += 1;
        let line = raw_line.trim();

        if self.parser.is_marker(line) {
            self.stats.blocks += 1;
            self.state = LineState::HeaderLine { consumed: 0 };
            return Ok(());
        }

        match self.state {
            LineState::SeekingMarker => {
                if !line.is_empty() {
                    self.stats.orphan_lines += 1;
                }
            }
            LineState::HeaderLine { consumed } => {
                let consumed = consumed + 1;
                if consumed == 1 {
                    let line_number = self.stats.total_lines;
                    let header = parse_block_header(line).map_err(|e| match e {
                        Error::Validation { message } => {
                            Error::validation(format!("line {}: {}", line_number, message))
                        }
                        other => other,
                    })?;
                    debug!(
                        "Block {}: event {} '{}' ({})",
                        self.stats.blocks, header.event_num, header.event_name, header.gender
                    );
                    self.blocks.push(header);
                }

                self.state = if consumed >= self.parser.header_block_size.saturating_sub(1) {
                    LineState::DataLine
                } else {
                    LineState::HeaderLine { consumed }
                };
            }
            LineState::DataLine => self.data_line(line),
        }

        Ok(())
    }

    fn data_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let Some(block) = self.blocks.len().checked_sub(1) else {
            self.stats.orphan_lines += 1;
            return;
        };

        let fields: Vec<String> = line.split(',').map(|f| f.trim().to_string()).collect();
        let first = fields.first().map(String::as_str).unwrap_or("");

        if !is_place(first) || self.parser.is_skip_code(first) {
            self.stats.rows_skipped += 1;
            return;
        }

        self.stats.max_columns = self.stats.max_columns.max(fields.len());
        self.pending.push((block, fields));
    }

    fn finish(self) -> ParseResult {
        let Self {
            parser,
            blocks,
            pending,
            mut stats,
            ..
        } = self;

        if stats.orphan_lines > 0 {
            let message = format!(
                "{} line(s) before the first '{}' marker were ignored",
                stats.orphan_lines, parser.marker
            );
            warn!("{}", message);
            stats.errors.push(message);
        }

        let width = stats.max_columns;
        let rows: Vec<AthleteRow> = pending
            .into_iter()
            .map(|(block, mut fields)| {
                fields.resize(width, String::new());
                AthleteRow::new(block, fields)
            })
            .collect();
        stats.data_rows = rows.len();

        if rows.is_empty() {
            warn!("No data rows extracted from {} block(s)", stats.blocks);
        }

        info!(
            "Parsed {} rows from {} blocks ({} skipped, width {}, {:.1}% retained)",
            stats.data_rows,
            stats.blocks,
            stats.rows_skipped,
            width,
            stats.success_rate()
        );

        ParseResult {
            blocks,
            rows,
            stats,
        }
    }
}
