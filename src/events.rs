//! Launch event logging.
//!
//! When enabled, each invocation appends NDJSON records (one JSON object per
//! line) to a log file chosen by `--event-log` or the `event_log` config key.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: `launch` or `complete`
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `details`: Freeform object with action-specific details
//!
//! Logging never changes the outcome of a launch: write failures are
//! reported as warnings by [`EventLog::record`].

use crate::error::{LauncherError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Install script is about to be spawned.
    Launch,
    /// Install script finished (or failed to start).
    Complete,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Launch => write!(f, "launch"),
            EventAction::Complete => write!(f, "complete"),
        }
    }
}

/// An event record for the launch log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who ran the launcher (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            LauncherError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Destination for launch events. A disabled log drops everything.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    /// A log that writes to `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Append an event, printing a warning instead of failing.
    pub fn record(&self, event: &Event) {
        if let Some(path) = &self.path {
            if let Err(e) = append_event(path, event) {
                eprintln!("Warning: failed to log {} event: {}", event.action, e);
            }
        }
    }
}

/// Append an event to the log file at `path`.
///
/// The file and its parent directory are created if they don't exist. Each
/// append results in one line with a trailing newline.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                LauncherError::UserError(format!(
                    "failed to create event log directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LauncherError::UserError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        LauncherError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
