//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the launcher.
///
/// This struct represents the contents of `claude-parallel.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command line used to run the install script (default: "bash").
    ///
    /// Parsed with shell-words, so extra flags are allowed (e.g. `bash -e`).
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// File name of the install script (default: "install.sh").
    #[serde(default = "default_script_name")]
    pub script_name: String,

    /// Extra directories searched for the script before the built-in locations.
    ///
    /// A leading `~/` is expanded to the home directory.
    #[serde(default)]
    pub search_dirs: Vec<String>,

    /// Whether to print the informational banner before launching.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Path of the NDJSON launch log. Logging is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script_name: default_script_name(),
            search_dirs: Vec::new(),
            banner: default_true(),
            event_log: None,
        }
    }
}
