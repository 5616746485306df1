//! # Tip Time Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging)
//! 3. Hand over to `tiptime_cli::run`

use clap::Parser;
use std::process::ExitCode;
use tiptime_cli::cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tiptime_cli::init_tracing(cli.verbose);

    match tiptime_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("tiptime: {}", e);
            ExitCode::FAILURE
        }
    }
}
