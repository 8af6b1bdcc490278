//! Configuration constants and defaults for the launcher.

/// File name of the config looked up in the package directory.
pub const CONFIG_FILE_NAME: &str = "claude-parallel.yaml";

/// Default interpreter used to run the install script.
pub const DEFAULT_INTERPRETER: &str = "bash";

/// Default file name of the install script.
pub const DEFAULT_SCRIPT_NAME: &str = "install.sh";

pub(crate) fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

pub(crate) fn default_script_name() -> String {
    DEFAULT_SCRIPT_NAME.to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
