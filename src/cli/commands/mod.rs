//! Command implementations for the track meet processor CLI
//!
//! Each command lives in its own module; [`shared`] holds logging,
//! configuration loading, input discovery and the concurrent file runner.

pub mod results;
pub mod shared;
pub mod start_list;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the selected subcommand
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::StartList(start_list_args)) => {
            start_list::run_start_list(start_list_args).await
        }
        Some(Commands::Results(results_args)) => results::run_results(results_args).await,
        None => Err(Error::configuration("No command given")),
    }
}
