//! Error types for the claude-parallel launcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Each variant maps to a process exit code via [`LauncherError::exit_code`].
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The install script was not found at any searched location.
    #[error("install script not found at {}{}", .path.display(), format_searched(.path, .searched))]
    MissingScript {
        /// The location the script was expected at.
        path: PathBuf,
        /// Every candidate that was checked, in search order.
        searched: Vec<PathBuf>,
    },

    /// The install script ran but did not exit successfully.
    #[error("{}", describe_exit(.code))]
    ChildFailed {
        /// Exit code reported by the child, if any.
        code: Option<i32>,
    },

    /// The install script could not be started.
    #[error("failed to launch install script: {0}")]
    SpawnFailed(String),

    /// Bad arguments or configuration.
    #[error("{0}")]
    UserError(String),
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::MissingScript { .. } => exit_codes::FAILURE,
            LauncherError::ChildFailed { code } => code.unwrap_or(exit_codes::FAILURE),
            LauncherError::SpawnFailed(_) => exit_codes::FAILURE,
            LauncherError::UserError(_) => exit_codes::FAILURE,
        }
    }

    /// Whether `main` should print this error.
    ///
    /// A failing child has already reported on the shared terminal.
    pub fn should_report(&self) -> bool {
        !matches!(self, LauncherError::ChildFailed { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("install script exited with code {}", code),
        None => "install script terminated without an exit code".to_string(),
    }
}

fn format_searched(path: &Path, searched: &[PathBuf]) -> String {
    let others: Vec<_> = searched.iter().filter(|p| p.as_path() != path).collect();
    if others.is_empty() {
        return String::new();
    }

    let mut msg = String::from("\n\nAlso searched:");
    for candidate in others {
        msg.push_str(&format!("\n  {}", candidate.display()));
    }
    msg
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
