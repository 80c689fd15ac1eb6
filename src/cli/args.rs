//! Command-line argument definitions for the track meet processor
//!
//! Defines the CLI interface using the clap derive API. Options shared by
//! both ingestion commands live in [`CommonArgs`] and are flattened into
//! each subcommand.

use crate::config::OutputFormat as ConfigOutputFormat;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the track meet processor
///
/// Turns start-list and event-result exports from meet timing software into
/// ranked, scored projections and team standings.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trackmeet-processor",
    version,
    about = "Rank and score track-and-field start lists and event results",
    long_about = "Parses ;;StartList exports and per-event result files, ranks every \
                  event with tie-aware point splitting, collapses combined events and \
                  writes the gender → event → results tree plus team standings as JSON, \
                  CSV or Parquet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Project places, points and team standings from start lists
    StartList(StartListArgs),
    /// Ingest event result files and track season bests
    Results(ResultsArgs),
}

/// Arguments for the start-list command
#[derive(Debug, Clone, Parser)]
pub struct StartListArgs {
    /// Meet name; its slug becomes the meet id
    #[arg(long = "meet-name", value_name = "NAME")]
    pub meet_name: String,

    /// Meet year, defaults to the current year
    #[arg(long = "meet-year", value_name = "YEAR")]
    pub meet_year: Option<String>,

    /// Group events by number instead of by name
    #[arg(long = "by-number", help = "Group events by event number instead of name")]
    pub by_number: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the results command
#[derive(Debug, Clone, Parser)]
pub struct ResultsArgs {
    /// JSON file holding season bests between runs
    ///
    /// Loaded before processing (a missing file starts empty) and written
    /// back afterwards.
    #[arg(
        long = "season-best-store",
        value_name = "FILE",
        help = "JSON file that persists season bests between runs"
    )]
    pub season_best_store: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every ingestion command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Input files or directories (searched recursively for .csv/.txt)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config_dir>/trackmeet-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output directory for generated files
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "PATH",
        help = "Output directory for generated files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Output file format
    #[arg(long = "format", value_enum, help = "Output file format")]
    pub format: Option<FileFormat>,

    /// Season assumed when a file does not reveal one
    #[arg(long = "season", value_name = "SEASON", help = "Default season (indoor or outdoor)")]
    pub season: Option<String>,

    /// Number of files processed concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of files processed concurrently"
    )]
    pub workers: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// File formats selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    /// Nested JSON documents
    Json,
    /// Flat CSV tables
    Csv,
    /// Flat Parquet tables
    Parquet,
}

impl From<FileFormat> for ConfigOutputFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Json => ConfigOutputFormat::Json,
            FileFormat::Csv => ConfigOutputFormat::Csv,
            FileFormat::Parquet => ConfigOutputFormat::Parquet,
        }
    }
}

impl Args {
    /// Shared options of the selected command
    pub fn common(&self) -> Option<&CommonArgs> {
        match self.command.as_ref()? {
            Commands::StartList(args) => Some(&args.common),
            Commands::Results(args) => Some(&args.common),
        }
    }
}

impl CommonArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::not_found(input.display().to_string()));
            }
        }

        if self.workers == Some(0) {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
