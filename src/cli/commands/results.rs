//! `results` command
//!
//! Ingests result files against one shared season-best store. The store is
//! loaded before the run and written back afterwards, so season bests keep
//! improving across invocations.

use crate::app::services::export::{results_frame, write_frame, write_json};
use crate::app::services::pipeline::{EventResultPipeline, EventResultReport};
use crate::app::services::scoring::InMemorySeasonBestStore;
use crate::cli::args::ResultsArgs;
use crate::cli::commands::shared::{
    FileSummary, ProcessingStats, create_progress_bar, discover_inputs, load_configuration,
    output_stem, print_summary, process_concurrently, setup_logging,
};
use crate::config::{Config, OutputFormat};
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Run the results command
pub async fn run_results(args: ResultsArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting result ingestion");
    debug!("Command line arguments: {:?}", args);

    args.common.validate()?;
    let config = load_configuration(&args.common)?;

    let store = Arc::new(match &args.season_best_store {
        Some(path) => InMemorySeasonBestStore::load(path)?,
        None => InMemorySeasonBestStore::new(),
    });

    let files = discover_inputs(&args.common.inputs, &config.processing.skip_filename_substrings)?;
    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    let progress_bar = (args.common.show_progress() && !files.is_empty())
        .then(|| create_progress_bar(files.len() as u64, "Ingesting results..."));

    let pipeline = EventResultPipeline::new(&config, store.clone());
    let workers = config.processing.max_concurrent_files;
    let outcomes = process_concurrently(files, workers, progress_bar.as_ref(), move |path| {
        let report = pipeline.process_file(path, None)?;
        write_report(&report, path, &config)
    })
    .await;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Results complete");
    }

    stats.absorb(outcomes)?;

    if let Some(path) = &args.season_best_store {
        store.save(path)?;
        info!("Saved {} season bests to {}", store.len(), path.display());
    }

    stats.processing_time = start_time.elapsed();

    if !args.common.quiet {
        print_summary("Result ingestion complete", &stats);
    }

    Ok(stats)
}

/// Write one event update in the configured format
///
/// JSON output is the full report including the update document; the flat
/// formats hold the scored records and are skipped for status-only updates.
pub fn write_report(report: &EventResultReport, source: &Path, config: &Config) -> Result<FileSummary> {
    let output_dir = &config.output.output_dir;
    let stem = output_stem(source);
    let format = config.output.format;

    let outputs = match format {
        OutputFormat::Json => {
            let path = output_dir.join(format!("{}.json", stem));
            write_json(report, &path, config.output.pretty)?;
            vec![path]
        }
        OutputFormat::Csv | OutputFormat::Parquet if report.is_scored() => {
            let path = output_dir.join(format!("{}_results.{}", stem, format.extension()));
            write_frame(&mut results_frame(&report.results)?, &path, format)?;
            vec![path]
        }
        OutputFormat::Csv | OutputFormat::Parquet => {
            info!("{}: status '{}', no table written", stem, report.update.status);
            Vec::new()
        }
    };

    let records = report
        .update
        .event_results
        .as_ref()
        .map(|results| results.len())
        .unwrap_or(0);

    Ok(FileSummary {
        events: usize::from(report.is_scored()),
        records,
        outputs,
    })
}
