//! Configuration management and validation.
//!
//! Provides configuration structures for parsing, scoring, processing and
//! output settings. Configuration is layered: built-in defaults, then an
//! optional TOML file, then `TRACKMEET_*` environment variables, and finally
//! CLI overrides applied by the command layer.

use crate::app::models::{GroupingKey, Season};
use crate::constants::{
    APP_NAME, BLOCK_START_MARKER, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SKIP_CODES,
    DEFAULT_SKIP_FILENAME_SUBSTRINGS, ENV_PREFIX, HEADER_BLOCK_SIZE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Start-list parsing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Marker that opens an event block
    pub block_marker: String,

    /// Logical header lines per block, including the marker line
    pub header_block_size: usize,

    /// First-field codes of rows that are not athletes
    pub skip_codes: Vec<String>,

    /// Event identifier used to group start-list records
    pub grouping: GroupingKey,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            block_marker: BLOCK_START_MARKER.to_string(),
            header_block_size: HEADER_BLOCK_SIZE,
            skip_codes: DEFAULT_SKIP_CODES.iter().map(|s| s.to_string()).collect(),
            grouping: GroupingKey::EventName,
        }
    }
}

/// Scoring settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Season assumed when a result file does not reveal one
    pub default_season: Option<Season>,

    /// Also require matching athlete ids when de-duplicating entrants
    pub dedupe_on_athlete_id: bool,
}

/// File processing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Upper bound on files processed at once
    pub max_concurrent_files: usize,

    /// Files whose name contains any of these fragments are ignored
    pub skip_filename_substrings: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_concurrent_files: num_cpus::get(),
            skip_filename_substrings: DEFAULT_SKIP_FILENAME_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Output format for processed files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "parquet" => Some(OutputFormat::Parquet),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl Config {
    /// Default config file location (`<config_dir>/trackmeet-processor/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::serialization(format!("Invalid config file: {}", e)))
    }

    /// Build configuration from defaults, an optional file and the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!("Loaded layered configuration: {:?}", config);
        Ok(config)
    }

    /// Apply `TRACKMEET_*` overrides using the supplied variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(dir) = var("OUTPUT_DIR") {
            self.output.output_dir = PathBuf::from(dir);
        }

        if let Some(format) = var("OUTPUT_FORMAT") {
            self.output.format = OutputFormat::parse(&format).ok_or_else(|| {
                Error::configuration(format!("Unknown output format '{}'", format))
            })?;
        }

        if let Some(workers) = var("MAX_CONCURRENT_FILES") {
            self.processing.max_concurrent_files = workers.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{}MAX_CONCURRENT_FILES must be a positive integer, got '{}'",
                    ENV_PREFIX, workers
                ))
            })?;
        }

        if let Some(season) = var("DEFAULT_SEASON") {
            self.scoring.default_season = Some(Season::parse(&season).ok_or_else(|| {
                Error::configuration(format!("Unknown season '{}'", season))
            })?);
        }

        Ok(())
    }

    /// Reject settings the pipelines cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.parsing.block_marker.trim().is_empty() {
            return Err(Error::configuration("Block marker must not be empty"));
        }

        if self.parsing.header_block_size < 2 {
            return Err(Error::configuration(format!(
                "Header block size must be at least 2 (marker plus metadata line), got {}",
                self.parsing.header_block_size
            )));
        }

        if self.processing.max_concurrent_files == 0 {
            return Err(Error::configuration(
                "max_concurrent_files must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output.output_dir = output_dir;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.processing.max_concurrent_files = max_files;
        self
    }

    /// Set the default season
    pub fn with_default_season(mut self, season: Season) -> Self {
        self.scoring.default_season = Some(season);
        self
    }
}
