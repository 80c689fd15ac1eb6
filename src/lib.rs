//! Track Meet Processor Library
//!
//! A Rust library for turning vendor flat-file exports from track-and-field
//! timing software into normalized, ranked and scored meet projections.
//!
//! This library provides tools for:
//! - Splitting `;;StartList` exports into event blocks with header/data handling
//! - Inferring gender, event name, round, status and season from free text
//! - Collapsing combined events (decathlon, heptathlon, pentathlon) to one entry
//! - Normalizing time and distance marks into comparable numbers
//! - Ranking entrants with tie-aware point splitting
//! - Assembling the gender → event → results tree handed to storage
//! - Team standings, season-best tracking and flat CSV/Parquet export

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod block_parser;
        pub mod export;
        pub mod mark_parser;
        pub mod metadata;
        pub mod pipeline;
        pub mod result_parser;
        pub mod scoring;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EventType, Gender, ResultTree, ScoredRecord};
pub use config::Config;

/// Result type alias for the track meet processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for start-list and result ingestion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid input (e.g. a metadata row with too few fields)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Event status outside the accepted set
    #[error("Event status '{status}' is not allowed; expected one of: {}", allowed.join(", "))]
    ForbiddenStatus {
        status: String,
        allowed: Vec<String>,
    },

    /// Gender could not be inferred for a combined event
    #[error("Gender undetermined for event '{event_name}' (season: {season})")]
    GenderUndetermined { event_name: String, season: String },

    /// Records keyed by event name and event number were mixed in one file
    #[error("Mixed grouping keys: aggregator groups by {expected}, record keyed by {found}")]
    MixedGroupingKeys { expected: String, found: String },

    /// Two distinct events resolved to the same grouping key
    #[error("Event key '{key}' is shared by distinct events '{existing}' and '{incoming}'")]
    ConflictingEvent {
        key: String,
        existing: String,
        incoming: String,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON/TOML (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Flat table export error
    #[error("Export error: {message}")]
    Export {
        message: String,
        #[source]
        source: Option<polars::error::PolarsError>,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create a file not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a forbidden status error listing the allowed statuses
    pub fn forbidden_status(status: impl Into<String>, allowed: &[&str]) -> Self {
        Self::ForbiddenStatus {
            status: status.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an undetermined gender error
    pub fn gender_undetermined(event_name: impl Into<String>, season: impl Into<String>) -> Self {
        Self::GenderUndetermined {
            event_name: event_name.into(),
            season: season.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>, source: Option<polars::error::PolarsError>) -> Self {
        Self::Export {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::Export {
            message: "Flat table export failed".to_string(),
            source: Some(error),
        }
    }
}
