//! claude-parallel: installer launcher for Claude Parallel templates.
//!
//! This is the main entry point for the `claude-parallel` CLI. It parses
//! arguments, runs the install script, and exits with the script's exit code
//! (or 1 when the launcher itself fails).

mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod launcher;
pub mod locate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match launcher::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // The install script reports its own failures on the shared terminal
            if err.should_report() {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(exit_codes::to_exit_byte(err.exit_code()))
        }
    }
}
