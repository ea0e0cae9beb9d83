//! ap-census - Wi-Fi access point presence and occupancy monitor.
//!
//! Periodically scans for nearby access points, folds related radios into
//! logical APs, tracks their presence over a TTL window, and reports a
//! per-cycle device-count estimate.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Watch(args) => commands::run_watch(args, cli.json).await,
        Commands::Sample(args) => commands::run_sample(args, cli.json).await,
    }
}
