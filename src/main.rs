//! Puntuar CLI
//!
//! Credit-risk scoring from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Score one record
//! puntuar score --model models/rf.json --set ODInterest=50 --set NoOfArrearDays=45
//!
//! # Score a CSV and export results
//! puntuar batch loans.csv --config puntuar.yaml --output scored.csv --xlsx scored.xlsx
//!
//! # Inspect the model
//! puntuar importances --config puntuar.yaml
//! puntuar info --config puntuar.yaml
//! ```

use clap::Parser;
use puntuar::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
