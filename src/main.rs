use std::process::ExitCode;

use clap::Parser;
use hunt_maze::app::{App, cli::Cli, logging::init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log records are flushed on exit
    let _log_guard = match init_logging(&cli.log_file, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", cli.log_file.display());
            return ExitCode::FAILURE;
        }
    };

    match App::default().run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
