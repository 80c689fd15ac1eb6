//! `start-list` command
//!
//! Projects every start list in the inputs independently and writes one
//! report per file: the nested JSON report, or flat results and standings
//! tables for CSV/Parquet.

use crate::app::models::MeetInfo;
use crate::app::services::export::{results_frame, standings_frame, write_frame, write_json};
use crate::app::services::pipeline::{StartListPipeline, StartListReport};
use crate::cli::args::StartListArgs;
use crate::cli::commands::shared::{
    FileSummary, ProcessingStats, apply_grouping, create_progress_bar, discover_inputs,
    load_configuration, output_stem, print_summary, process_concurrently, setup_logging,
};
use crate::config::{Config, OutputFormat};
use crate::Result;
use chrono::Datelike;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Run the start-list command
pub async fn run_start_list(args: StartListArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting start-list projection");
    debug!("Command line arguments: {:?}", args);

    args.common.validate()?;
    let mut config = load_configuration(&args.common)?;
    apply_grouping(&mut config, args.by_number);

    let meet_year = args
        .meet_year
        .clone()
        .unwrap_or_else(|| chrono::Local::now().year().to_string());
    let meet = MeetInfo::new(args.meet_name.trim(), meet_year);
    info!("Meet '{}' ({}) {}", meet.name, meet.id, meet.year);

    let files = discover_inputs(&args.common.inputs, &config.processing.skip_filename_substrings)?;
    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    let progress_bar = (args.common.show_progress() && !files.is_empty())
        .then(|| create_progress_bar(files.len() as u64, "Projecting start lists..."));

    let pipeline = StartListPipeline::new(&config);
    let workers = config.processing.max_concurrent_files;
    let outcomes = process_concurrently(files, workers, progress_bar.as_ref(), move |path| {
        let report = pipeline.process_file(path, meet.clone())?;
        write_report(&report, path, &config)
    })
    .await;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Start lists complete");
    }

    stats.absorb(outcomes)?;
    stats.processing_time = start_time.elapsed();

    if !args.common.quiet {
        print_summary("Start-list projection complete", &stats);
    }

    Ok(stats)
}

/// Write one start-list report in the configured format
pub fn write_report(report: &StartListReport, source: &Path, config: &Config) -> Result<FileSummary> {
    let output_dir = &config.output.output_dir;
    let stem = output_stem(source);
    let format = config.output.format;

    let outputs = match format {
        OutputFormat::Json => {
            let path = output_dir.join(format!("{}.json", stem));
            write_json(report, &path, config.output.pretty)?;
            vec![path]
        }
        OutputFormat::Csv | OutputFormat::Parquet => {
            let results_path = table_path(output_dir, &stem, "results", format);
            write_frame(&mut results_frame(&report.results)?, &results_path, format)?;

            let standings_path = table_path(output_dir, &stem, "standings", format);
            write_frame(&mut standings_frame(&report.standings)?, &standings_path, format)?;

            vec![results_path, standings_path]
        }
    };

    let records = report
        .results
        .values()
        .flat_map(|events| events.values())
        .map(|event| event.event_results.len())
        .sum();

    Ok(FileSummary {
        events: report.event_count(),
        records,
        outputs,
    })
}

fn table_path(output_dir: &Path, stem: &str, table: &str, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}_{}.{}", stem, table, format.extension()))
}
