//! File writers for flat tables and JSON reports

use crate::config::OutputFormat;
use crate::{Error, Result};
use polars::prelude::{CsvWriter, DataFrame, ParquetCompression, ParquetWriter, SerWriter};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;
    }
    File::create(path).map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))
}

/// Write a frame as CSV or Parquet; JSON is not a table format
pub fn write_frame(frame: &mut DataFrame, path: &Path, format: OutputFormat) -> Result<()> {
    let mut file = create_file(path)?;

    match format {
        OutputFormat::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(frame)
                .map_err(|e| {
                    Error::export(format!("Failed to write CSV {}", path.display()), Some(e))
                })?;
        }
        OutputFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(frame)
                .map_err(|e| {
                    Error::export(format!("Failed to write Parquet {}", path.display()), Some(e))
                })?;
        }
        OutputFormat::Json => {
            return Err(Error::export(
                "JSON output is written with write_json, not as a flat table",
                None,
            ));
        }
    }

    debug!("Wrote {} rows to {}", frame.height(), path.display());
    Ok(())
}

/// Serialize any report as JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    let file = create_file(path)?;
    if pretty {
        serde_json::to_writer_pretty(file, value)?;
    } else {
        serde_json::to_writer(file, value)?;
    }
    debug!("Wrote JSON report to {}", path.display());
    Ok(())
}
