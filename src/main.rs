//! proposal-gen: regenerates dated ERP client proposals.
//!
//! This is the main entry point for the `proposal-gen` CLI. It parses
//! arguments, runs the selected pipeline, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod content;
pub mod context;
pub mod dates;
pub mod document;
#[cfg(feature = "docx")]
pub mod docx;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod generate;
pub mod logging;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
