//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{LauncherError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LauncherError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `claude-parallel.yaml` in the
    /// package directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, package_dir: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match package_dir.map(|dir| dir.join(CONFIG_FILE_NAME)) {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                LauncherError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `interpreter` must split into at least one word
    /// - `script_name` must be a bare, non-empty file name
    pub fn validate(&self) -> Result<()> {
        self.interpreter_argv()?;

        let name = self.script_name.as_str();
        if name.is_empty() {
            return Err(LauncherError::UserError(
                "config validation failed: script_name must be non-empty".to_string(),
            ));
        }
        if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
            return Err(LauncherError::UserError(format!(
                "config validation failed: script_name must be a file name, not a path (found '{}')",
                name
            )));
        }

        Ok(())
    }

    /// Split the interpreter command line into argv form.
    pub fn interpreter_argv(&self) -> Result<Vec<String>> {
        let args = shell_words::split(&self.interpreter).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to parse interpreter '{}': {}\n\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.interpreter, e
            ))
        })?;

        if args.is_empty() {
            return Err(LauncherError::UserError(
                "config validation failed: interpreter is empty after parsing".to_string(),
            ));
        }

        Ok(args)
    }

    /// Configured search directories with `~/` expanded.
    pub fn expanded_search_dirs(&self) -> Vec<PathBuf> {
        self.search_dirs.iter().map(|dir| expand_home(dir)).collect()
    }
}

/// Expand a leading `~/` (or a bare `~`) to the home directory.
///
/// Paths are returned unchanged when no home directory is known.
pub fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
