//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, input discovery and the
//! concurrent file runner used by both ingestion commands.

use crate::app::models::{GroupingKey, Season};
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::constants::INPUT_FILE_EXTENSIONS;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of input files found
    pub files_discovered: usize,
    /// Number of files ingested successfully
    pub files_processed: usize,
    /// Number of files that failed
    pub files_failed: usize,
    /// Number of scored events across all files
    pub events_scored: usize,
    /// Number of scored records across all files
    pub records_scored: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Output files and their sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
    /// Per-file failure messages
    pub failures: Vec<(String, String)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Record a written output file
    pub fn record_output(&mut self, path: &Path) {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        self.output_sizes.push((path.display().to_string(), size));
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// What one successfully ingested file produced
#[derive(Debug, Clone, Default)]
pub struct FileSummary {
    pub events: usize,
    pub records: usize,
    pub outputs: Vec<PathBuf>,
}

impl ProcessingStats {
    /// Fold per-file outcomes into the totals, stopping at a critical error
    pub fn absorb(&mut self, outcomes: Vec<(PathBuf, Result<FileSummary>)>) -> Result<()> {
        for (path, outcome) in outcomes {
            match outcome {
                Ok(summary) => {
                    self.files_processed += 1;
                    self.events_scored += summary.events;
                    self.records_scored += summary.records;
                    for output in &summary.outputs {
                        self.record_output(output);
                    }
                }
                Err(e) if is_critical_error(&e) => return Err(e),
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    self.files_failed += 1;
                    self.failures.push((file_label(&path), e.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Print the coloured end-of-run summary
pub fn print_summary(title: &str, stats: &ProcessingStats) {
    println!();
    println!("{}", title.bright_green().bold());
    println!("{}", "━".repeat(40).bright_black());
    println!("   • Files discovered: {}", stats.files_discovered);
    println!(
        "   • Files processed:  {}",
        stats.files_processed.to_string().bright_cyan()
    );
    println!("   • Events scored:    {}", stats.events_scored);
    println!("   • Records scored:   {}", stats.records_scored);
    println!(
        "   • Output size:      {}",
        ProcessingStats::format_size(stats.total_output_size())
    );
    println!(
        "   • Processing time:  {}",
        HumanDuration(stats.processing_time)
    );

    if stats.files_failed > 0 {
        println!(
            "{}",
            format!("   Failed files: {}", stats.files_failed).bright_red().bold()
        );
        for (file, message) in &stats.failures {
            println!("     {} {}", file.bright_yellow(), message);
        }
    }

    if !stats.output_sizes.is_empty() {
        println!("\n{}", "Output files:".bright_white());
        for (file, size) in &stats.output_sizes {
            println!("   • {}: {}", file, ProcessingStats::format_size(*size));
        }
    }
    println!();
}

/// Set up structured logging
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trackmeet_processor={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        // A subscriber installed earlier in this process stays in place
        Err(e) => debug!("Logging already initialized: {}", e),
    }
    Ok(())
}

/// Load configuration using the layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args)?;
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) -> Result<()> {
    if let Some(output_dir) = &args.output_dir {
        config.output.output_dir = output_dir.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if let Some(workers) = args.workers {
        config.processing.max_concurrent_files = workers;
    }
    if let Some(season) = &args.season {
        let season = Season::parse(season)
            .ok_or_else(|| Error::configuration(format!("Unknown season '{}'", season)))?;
        config.scoring.default_season = Some(season);
    }

    debug!("Applied CLI overrides");
    Ok(())
}

/// Select event-number grouping for start lists
pub fn apply_grouping(config: &mut Config, by_number: bool) {
    if by_number {
        config.parsing.grouping = GroupingKey::EventNumber;
    }
}

/// Expand inputs into the sorted list of files to ingest
///
/// Directories are walked recursively for `.csv`/`.txt` files. Files whose
/// name contains a skip substring are ignored with a warning; explicitly
/// named files are taken regardless of extension.
pub fn discover_inputs(inputs: &[PathBuf], skip_substrings: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(Error::not_found(input.display().to_string()));
        }

        if input.is_file() {
            files.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let has_input_extension = path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| INPUT_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
            if entry.file_type().is_file() && has_input_extension {
                files.push(path.to_path_buf());
            }
        }
    }

    files.retain(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let skipped = skip_substrings
            .iter()
            .any(|fragment| !fragment.is_empty() && name.contains(fragment.as_str()));
        if skipped {
            warn!("Skipping {}", path.display());
        }
        !skipped
    });

    files.sort();
    files.dedup();

    debug!("Discovered {} input files", files.len());
    for file in &files {
        debug!("  Found: {}", file.display());
    }

    Ok(files)
}

/// Run `work` over every file on the blocking pool, at most `workers` at a time
///
/// Results come back in completion order, each paired with its path.
pub async fn process_concurrently<T, F>(
    files: Vec<PathBuf>,
    workers: usize,
    progress_bar: Option<&ProgressBar>,
    work: F,
) -> Vec<(PathBuf, Result<T>)>
where
    T: Send + 'static,
    F: Fn(&Path) -> Result<T> + Send + Sync + 'static,
{
    let work = Arc::new(work);

    let mut results = stream::iter(files)
        .map(|path| {
            let work = Arc::clone(&work);
            async move {
                let task_path = path.clone();
                let outcome = tokio::task::spawn_blocking(move || work(&task_path))
                    .await
                    .unwrap_or_else(|e| {
                        Err(Error::processing_interrupted(format!(
                            "Worker for {} failed: {}",
                            path.display(),
                            e
                        )))
                    });
                (path, outcome)
            }
        })
        .buffer_unordered(workers.max(1));

    let mut collected = Vec::new();
    while let Some((path, outcome)) = results.next().await {
        if let Some(pb) = progress_bar {
            pb.inc(1);
            pb.set_message(file_label(&path));
        }
        collected.push((path, outcome));
    }

    collected
}

/// File name without directories, for messages
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// File stem used to name outputs
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string())
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn common(args: &[&str]) -> CommonArgs {
        let mut argv = vec!["trackmeet-processor", "results"];
        argv.extend_from_slice(args);
        match Args::parse_from(argv).command {
            Some(Commands::Results(results)) => results.common,
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn test_processing_stats_total_output_size() {
        let stats = ProcessingStats {
            output_sizes: vec![
                ("a.json".to_string(), 1000),
                ("b.parquet".to_string(), 2000),
            ],
            ..Default::default()
        };
        assert_eq!(stats.total_output_size(), 3000);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(ProcessingStats::format_size(500), "500 B");
        assert_eq!(ProcessingStats::format_size(1536), "1.50 KB");
        assert_eq!(ProcessingStats::format_size(1048576), "1.00 MB");
    }

    #[test]
    fn test_cli_overrides() {
        let args = common(&[
            "--format", "csv", "-j", "3", "-o", "/tmp/out", "--season", "Indoor", "x.csv",
        ]);
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args).unwrap();

        assert_eq!(config.output.format, crate::config::OutputFormat::Csv);
        assert_eq!(config.processing.max_concurrent_files, 3);
        assert_eq!(config.output.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.scoring.default_season, Some(Season::Indoor));

        let bad = common(&["--season", "summer", "x.csv"]);
        assert!(apply_cli_overrides(&mut config, &bad).is_err());
    }

    #[test]
    fn test_apply_grouping() {
        let mut config = Config::default();
        apply_grouping(&mut config, false);
        assert_eq!(config.parsing.grouping, GroupingKey::EventName);
        apply_grouping(&mut config, true);
        assert_eq!(config.parsing.grouping, GroupingKey::EventNumber);
    }

    #[test]
    fn test_discover_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("day1");
        fs::create_dir_all(&nested).unwrap();

        fs::write(temp_dir.path().join("100m.csv"), "x").unwrap();
        fs::write(nested.join("4x400.TXT"), "x").unwrap();
        fs::write(nested.join("100m_splits.csv"), "x").unwrap();
        fs::write(nested.join("notes.md"), "x").unwrap();

        let files = discover_inputs(
            &[temp_dir.path().to_path_buf()],
            &["splits".to_string()],
        )
        .unwrap();

        let names: Vec<String> = files.iter().map(|p| file_label(p)).collect();
        assert_eq!(names, vec!["100m.csv", "4x400.TXT"]);
    }

    #[test]
    fn test_discover_inputs_explicit_file_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("heat.dat");
        fs::write(&file, "x").unwrap();

        let files = discover_inputs(&[file.clone(), file.clone()], &[]).unwrap();
        assert_eq!(files, vec![file]);

        let missing = discover_inputs(&[temp_dir.path().join("gone.csv")], &[]);
        assert!(matches!(missing, Err(Error::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_process_concurrently_collects_every_file() {
        let files: Vec<PathBuf> = (0..5).map(|i| PathBuf::from(format!("f{}.csv", i))).collect();

        let results = process_concurrently(files, 2, None, |path: &Path| {
            if path.ends_with("f3.csv") {
                Err(Error::validation("bad file"))
            } else {
                Ok(file_label(path))
            }
        })
        .await;

        assert_eq!(results.len(), 5);
        let failures = results.iter().filter(|(_, r)| r.is_err()).count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_absorb_counts_failures() {
        let mut stats = ProcessingStats::default();
        let outcomes = vec![
            (
                PathBuf::from("a.csv"),
                Ok(FileSummary {
                    events: 2,
                    records: 11,
                    outputs: Vec::new(),
                }),
            ),
            (PathBuf::from("b.csv"), Err(Error::validation("short row"))),
        ];

        stats.absorb(outcomes).unwrap();
        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.events_scored, 2);
        assert_eq!(stats.records_scored, 11);
        assert_eq!(stats.failures[0].0, "b.csv");

        let critical = vec![(PathBuf::from("c.csv"), Err(Error::configuration("bad")))];
        assert!(stats.absorb(critical).is_err());
    }

    #[test]
    fn test_is_critical_error() {
        assert!(is_critical_error(&Error::configuration("bad")));
        assert!(is_critical_error(&Error::processing_interrupted("ctrl-c")));
        assert!(!is_critical_error(&Error::validation("short row")));
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(output_stem(Path::new("/data/men_100m.csv")), "men_100m");
    }
}
