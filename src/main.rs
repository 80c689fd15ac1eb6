use clap::Parser;
use std::process;
use trackmeet_processor::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // No subcommand: show help and exit
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                let reason = match signal {
                    Ok(()) => "Processing interrupted by user".to_string(),
                    Err(e) => format!("Failed to listen for CTRL+C: {}", e),
                };
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(trackmeet_processor::Error::processing_interrupted(reason))
            }
        }
    });

    match result {
        Ok(stats) if stats.files_failed > 0 => process::exit(2),
        Ok(_) => process::exit(0),
        Err(error) => {
            // Alternate formatting prints the whole source chain
            let error = anyhow::Error::new(error);
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn show_help_and_commands() {
    println!("Track Meet Processor - start lists and results to scored projections");
    println!("====================================================================");
    println!();
    println!("USAGE:");
    println!("    trackmeet-processor <COMMAND> [OPTIONS] <INPUT>...");
    println!();
    println!("COMMANDS:");
    println!("    start-list  Project places, points and team standings from start lists");
    println!("    results     Ingest event result files and track season bests");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Project a meet from a directory of start lists:");
    println!("    trackmeet-processor start-list --meet-name \"Big Ten Outdoor\" lists/");
    println!();
    println!("    # Ingest results, keeping season bests between runs:");
    println!("    trackmeet-processor results --season-best-store sb.json results/");
    println!();
    println!("    # Flat Parquet tables instead of JSON:");
    println!("    trackmeet-processor start-list --meet-name Indoor --format parquet lists/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trackmeet-processor <COMMAND> --help");
}
