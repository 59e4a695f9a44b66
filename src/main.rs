//! Hunkcheck CLI entry point.
//!
//! Parses arguments, runs the review and maps errors to exit codes.

use hunkcheck::cli::Cli;
use hunkcheck::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose, cli.debug);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
