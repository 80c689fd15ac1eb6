//! Result file parsing
//!
//! The first record is the metadata row; every later record whose first
//! field is a numeric place is a data row, padded or truncated to the width
//! of the layout chosen for the event type.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::metadata_row::ResultMetadata;
use crate::app::models::{EventBlockHeader, EventType, Season};
use crate::app::services::block_parser::{AthleteRow, ParseStats, RowSchema};
use crate::app::services::metadata::classify_event;
use crate::{Error, Result};

/// Everything read from one result file
#[derive(Debug, Clone)]
pub struct ParsedResultFile {
    pub metadata: ResultMetadata,
    pub header: EventBlockHeader,
    pub event_type: EventType,
    pub schema: RowSchema,
    pub rows: Vec<AthleteRow>,
    pub stats: ParseStats,
}

/// Result file parser
#[derive(Debug, Clone, Default)]
pub struct ResultFileParser {
    default_season: Option<Season>,
}

impl ResultFileParser {
    pub fn new(default_season: Option<Season>) -> Self {
        Self { default_season }
    }

    /// Parse a result file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParsedResultFile> {
        info!("Parsing result file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open {}", file_path.display()), e)
        })?;

        self.parse_reader(file, &file_path.display().to_string())
    }

    /// Parse result CSV from any reader; `source` names it in errors
    pub fn parse_reader<R: Read>(&self, reader: R, source: &str) -> Result<ParsedResultFile> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = csv_reader.records();

        let metadata_record = records
            .next()
            .ok_or_else(|| Error::validation(format!("Result file '{}' is empty", source)))?
            .map_err(|e| Error::csv_parsing(source, "Failed to read metadata row", Some(e)))?;

        let metadata = ResultMetadata::from_record(&metadata_record)?;
        let header = metadata.to_header(self.default_season)?;
        let event_type = classify_event(&header.event_name);
        let schema = if event_type == EventType::Multi {
            RowSchema::RESULT_MULTI
        } else {
            RowSchema::RESULT_STANDARD
        };
        debug!("{}: {} event, {} layout", source, event_type, schema.name);

        let mut stats = ParseStats {
            total_lines: 1,
            blocks: 1,
            ..ParseStats::default()
        };
        let mut rows = Vec::new();

        for record in records {
            stats.total_lines += 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats
                        .errors
                        .push(format!("CSV error at record {}: {}", stats.total_lines, e));
                    continue;
                }
            };

            let first = record.get(0).unwrap_or("");
            if first.is_empty() || !first.chars().all(|c| c.is_ascii_digit()) {
                stats.rows_skipped += 1;
                continue;
            }

            stats.max_columns = stats.max_columns.max(record.len());
            let fields = record.iter().map(str::to_string).collect();
            rows.push(AthleteRow::new(0, schema.fit(fields)));
        }

        stats.data_rows = rows.len();
        if !stats.errors.is_empty() {
            warn!("{}: {} malformed records skipped", source, stats.errors.len());
        }
        info!(
            "Parsed {} result rows for {} '{}' ({} skipped)",
            stats.data_rows, header.gender, header.event_name, stats.rows_skipped
        );

        Ok(ParsedResultFile {
            metadata,
            header,
            event_type,
            schema,
            rows,
            stats,
        })
    }
}
