//! End-to-end start-list projection through files on disk and the CLI

use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trackmeet_processor::app::models::{Gender, MeetInfo};
use trackmeet_processor::app::services::export::{results_frame, standings_frame, write_frame};
use trackmeet_processor::app::services::pipeline::StartListPipeline;
use trackmeet_processor::cli::args::Args;
use trackmeet_processor::cli::commands;
use trackmeet_processor::config::{Config, OutputFormat};

const MEN_START_LIST: &str = ";;StartList
001,1,Men 100 M Prelims 10:30 AM,,
Heat Lane Name
,,,
,,,
1,1234,Noah,Lyles,,SR,Florida,FLA Florida,10.20,,
2,2345,Fred,Kerley,,JR,Texas,TEX Texas,10.20,,
3,3456,Erriyon,Knighton,,SO,Tampa,TAM Tampa,10.50,,
N,,Unattached,,,,,,,,
;;StartList
007,1,Men Shot Put Finals,,
Flight Name
,,,
,,,
1,4001,Ryan,Crouser,,SR,Texas,TEX Texas,23.10m,,
2,4002,Joe,Kovacs,,SR,Florida,FLA Florida,22.90m,,
3,4003,Tom,Walsh,,JR,Tampa,TAM Tampa,,,
";

const WOMEN_START_LIST: &str = ";;StartList
010,1,Pen Women 60 H,,
Heat Lane Name
,,,
,,,
1,6001,Anna,Hall,,SR,Florida,FLA Florida,8.10,,4500
2,6002,Kendell,Williams,,SR,Georgia,UGA Georgia,8.20,,4600
;;StartList
011,1,Pen Women High Jump,,
Flight Name
,,,
,,,
1,6001,Anna,Hall,,SR,Florida,FLA Florida,1.90m,,4500
";

fn write_input(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_start_list_file_to_tables() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write_input(input_dir.path(), "men.csv", MEN_START_LIST);

    let config = Config::default();
    let report = StartListPipeline::new(&config)
        .process_file(
            &input_dir.path().join("men.csv"),
            MeetInfo::new("Spring Invitational", "2025"),
        )
        .unwrap();

    assert_eq!(report.meet.id, "spring-invitational");
    assert_eq!(report.event_count(), 2);
    assert_eq!(report.stats.blocks, 2);
    assert_eq!(report.stats.data_rows, 6);

    let men = &report.results[&Gender::Men];
    let sprint: Vec<(u32, f64)> = men["100 M"]
        .event_results
        .iter()
        .map(|r| (r.place, r.score))
        .collect();
    assert_eq!(sprint, vec![(1, 9.0), (1, 9.0), (3, 6.0)]);

    let shot = &men["Shot Put"];
    assert_eq!(shot.sort_ascending, Some(false));
    assert_eq!(shot.event_results[0].athlete_name, "Ryan Crouser");
    assert_eq!(shot.event_results[2].seed_numeric, None);
    assert_eq!(shot.event_results[2].score, 6.0);

    let standings = &report.standings[&Gender::Men];
    assert_eq!(standings[0].team, "TEXAS");
    assert_eq!(standings[0].total, 19.0);

    let mut results = results_frame(&report.results).unwrap();
    let mut standings = standings_frame(&report.standings).unwrap();
    assert_eq!(results.height(), 6);

    let results_path = output_dir.path().join("men_results.parquet");
    let standings_path = output_dir.path().join("men_standings.csv");
    write_frame(&mut results, &results_path, OutputFormat::Parquet).unwrap();
    write_frame(&mut standings, &standings_path, OutputFormat::Csv).unwrap();

    assert!(results_path.exists());
    let standings_csv = fs::read_to_string(&standings_path).unwrap();
    assert!(standings_csv.lines().next().unwrap().contains("team"));
    assert!(standings_csv.contains("TAMPA"));
}

#[tokio::test]
async fn test_start_list_command_over_directory() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let nested = input_dir.path().join("women");
    fs::create_dir_all(&nested).unwrap();

    write_input(input_dir.path(), "men.csv", MEN_START_LIST);
    write_input(&nested, "women.txt", WOMEN_START_LIST);
    write_input(input_dir.path(), "men_splits.csv", "not a start list");

    let args = Args::parse_from([
        "trackmeet-processor",
        "start-list",
        "--meet-name",
        "Spring Invitational",
        "--meet-year",
        "2025",
        "-q",
        "-j",
        "2",
        "-o",
        output_dir.path().to_str().unwrap(),
        input_dir.path().to_str().unwrap(),
    ]);

    let stats = commands::run(args).await.unwrap();
    assert_eq!(stats.files_discovered, 2);
    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.events_scored, 3);

    let women: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(output_dir.path().join("women.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(women["meet"]["year"], "2025");
    assert_eq!(women["combined_rows_dropped"], 1);

    let pentathlon = &women["results"]["Women"]["Pentathlon"]["event_results"];
    assert_eq!(pentathlon[0]["athlete_name"], "Kendell Williams");
    assert_eq!(pentathlon[0]["score"], 10.0);
    assert!(output_dir.path().join("men.json").exists());
}

#[tokio::test]
async fn test_start_list_command_reports_bad_files() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    write_input(input_dir.path(), "good.csv", MEN_START_LIST);
    write_input(input_dir.path(), "bad.csv", ";;StartList\n001\n");

    let args = Args::parse_from([
        "trackmeet-processor",
        "start-list",
        "--meet-name",
        "Spring Invitational",
        "-q",
        "--format",
        "csv",
        "-o",
        output_dir.path().to_str().unwrap(),
        input_dir.path().to_str().unwrap(),
    ]);

    let stats = commands::run(args).await.unwrap();
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.failures[0].0, "bad.csv");
    assert!(output_dir.path().join("good_results.csv").exists());
    assert!(output_dir.path().join("good_standings.csv").exists());
}
