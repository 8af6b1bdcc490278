//! The installer launcher.
//!
//! Resolves the template and target, finds the install script, and runs it
//! through the configured interpreter with the launcher's own stdin, stdout
//! and stderr. The script's exit code is relayed as the launcher's result.

use crate::cli::{Cli, DEFAULT_TARGET, DEFAULT_TEMPLATE};
use crate::config::Config;
use crate::error::{LauncherError, Result};
use crate::events::{Event, EventAction, EventLog};
use crate::exit_codes;
use crate::locate::{self, install_dir, resolve_package_dir};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

/// The two values handed to the install script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Template name, uninterpreted.
    pub template: String,
    /// Target directory exactly as given.
    pub target: String,
}

impl Invocation {
    /// Apply the defaults for absent arguments.
    pub fn from_args(template: Option<String>, target: Option<String>) -> Self {
        Self {
            template: template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            target: target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
        }
    }

    /// Absolute form of the target, for display only.
    pub fn display_target(&self) -> PathBuf {
        std::path::absolute(&self.target).unwrap_or_else(|_| PathBuf::from(&self.target))
    }
}

/// Runs the install script for an [`Invocation`].
#[derive(Debug, Clone)]
pub struct Launcher {
    config: Config,
    events: EventLog,
}

impl Launcher {
    /// Create a launcher from a validated config.
    pub fn new(config: Config) -> Self {
        let events = match &config.event_log {
            Some(path) => EventLog::to_file(path),
            None => EventLog::disabled(),
        };
        Self { config, events }
    }

    /// Locate the script and run it, blocking until it exits.
    ///
    /// `explicit_script` bypasses the search. `package_dir` is the directory
    /// one level above the launcher binary and `home` the user's home
    /// directory, when known.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The script exited with code 0
    /// * `Err(LauncherError::MissingScript)` - No script was found; nothing was spawned
    /// * `Err(LauncherError::SpawnFailed)` - The interpreter could not be started
    /// * `Err(LauncherError::ChildFailed)` - The script exited unsuccessfully
    pub fn run(
        &self,
        invocation: &Invocation,
        explicit_script: Option<&Path>,
        package_dir: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<()> {
        let interpreter = self.config.interpreter_argv()?;

        if self.config.banner {
            println!("claude-parallel v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("  Template:   {}", invocation.template);
            println!("  Target:     {}", invocation.display_target().display());
        }

        let script = locate::locate_script(&self.config, explicit_script, package_dir, home)?;

        if self.config.banner {
            println!("  Script:     {}", script.display());
            println!();
        }

        self.events.record(&Event::new(EventAction::Launch).with_details(json!({
            "template": invocation.template,
            "target": invocation.target,
            "script": script.display().to_string(),
            "interpreter": interpreter,
        })));

        let started = Instant::now();
        let result = spawn_script(&interpreter, &script, invocation);

        let exit_code = match &result {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => e.exit_code(),
        };
        self.events.record(&Event::new(EventAction::Complete).with_details(json!({
            "exit_code": exit_code,
            "spawned": !matches!(result, Err(LauncherError::SpawnFailed(_))),
            "duration_ms": started.elapsed().as_millis() as u64,
        })));

        result
    }
}

/// Spawn `<interpreter...> <script> <template> <target>` with inherited stdio
/// and wait for it.
pub fn spawn_script(interpreter: &[String], script: &Path, invocation: &Invocation) -> Result<()> {
    let (program, interpreter_args) = interpreter.split_first().ok_or_else(|| {
        LauncherError::UserError("interpreter is empty after parsing".to_string())
    })?;

    let status = Command::new(program)
        .args(interpreter_args)
        .arg(script)
        .arg(&invocation.template)
        .arg(&invocation.target)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            LauncherError::SpawnFailed(format!(
                "{} {}: {}\n\n\
                 Fix: ensure '{}' is installed and in PATH.",
                interpreter.join(" "),
                script.display(),
                e,
                program
            ))
        })?;

    exit_status_to_result(status)
}

/// Map a child's exit status to the launcher's result.
pub fn exit_status_to_result(status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(LauncherError::ChildFailed {
            code: status.code(),
        })
    }
}

/// Run the launcher for parsed command line arguments.
///
/// Command line flags override values from the config file.
pub fn run(cli: Cli) -> Result<()> {
    let package_dir = resolve_package_dir(install_dir(), cli.script.is_some())?;

    let mut config = Config::resolve(cli.config.as_deref(), package_dir.as_deref())?;
    if let Some(interpreter) = cli.interpreter {
        config.interpreter = interpreter;
    }
    if let Some(path) = cli.event_log {
        config.event_log = Some(path.display().to_string());
    }
    if cli.quiet {
        config.banner = false;
    }
    config.validate()?;

    let explicit_script = cli.script.as_deref().map(locate::script_path_arg);
    let invocation = Invocation::from_args(cli.template, cli.target);

    Launcher::new(config).run(
        &invocation,
        explicit_script.as_deref(),
        package_dir.as_deref(),
        dirs::home_dir().as_deref(),
    )
}
