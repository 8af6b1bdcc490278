//! CLI argument parsing for claude-parallel.
//!
//! Uses clap derive macros for declarative argument definitions. The launch
//! itself lives in the `launcher` module.

use clap::Parser;
use std::path::PathBuf;

/// Default template name when none is given.
pub const DEFAULT_TEMPLATE: &str = "base";

/// Default target directory when none is given.
pub const DEFAULT_TARGET: &str = ".";

/// Install Claude Parallel templates into a project.
///
/// Runs the bundled install script with the chosen template and target
/// directory. The script's output and prompts go straight to this terminal,
/// and its exit code becomes the exit code of this command.
#[derive(Parser, Debug)]
#[command(name = "claude-parallel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template to install [default: base].
    ///
    /// Passed to the install script unchanged, even when it starts with `-`.
    #[arg(allow_hyphen_values = true)]
    pub template: Option<String>,

    /// Directory to install into [default: .].
    ///
    /// Passed to the install script unchanged, even when it starts with `-`.
    #[arg(allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Run this install script instead of searching for one.
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Command used to run the script (default: bash).
    #[arg(long, value_name = "CMD")]
    pub interpreter: Option<String>,

    /// Read configuration from this YAML file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append launch events to this NDJSON file.
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Do not print the banner before running the script.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
