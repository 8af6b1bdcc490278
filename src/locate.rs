//! Install script resolution.
//!
//! The launcher ships next to its install script: the binary lives in
//! `<package>/bin/` and the script in `<package>/`. Installed layouts that
//! put the script under a `share/claude-parallel` directory are searched as
//! well, after any directories named in the config.

use crate::config::{Config, expand_home};
use crate::error::{LauncherError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under `share/` for installed templates.
pub const SHARE_DIR_NAME: &str = "claude-parallel";

/// Ordered candidate locations for the install script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSearch {
    /// The location reported when nothing is found.
    pub primary: PathBuf,
    /// Every candidate, in search order. Empty when there was nowhere to look.
    pub candidates: Vec<PathBuf>,
}

impl ScriptSearch {
    /// Search for a script at exactly one path.
    pub fn explicit(path: PathBuf) -> Self {
        Self {
            primary: path.clone(),
            candidates: vec![path],
        }
    }

    /// Build the search list from config and the package directory.
    ///
    /// `home` is the user's home directory, used for the `~/.local/share`
    /// fallback. With no location to search at all, the bare script name is
    /// reported as the primary path and the candidate list is empty.
    pub fn new(config: &Config, package_dir: Option<&Path>, home: Option<&Path>) -> Self {
        let name = config.script_name.as_str();

        let mut candidates: Vec<PathBuf> = config
            .expanded_search_dirs()
            .into_iter()
            .map(|dir| dir.join(name))
            .collect();

        let primary = match package_dir {
            Some(dir) => {
                let primary = dir.join(name);
                candidates.push(primary.clone());
                candidates.push(dir.join("share").join(SHARE_DIR_NAME).join(name));
                Some(primary)
            }
            None => None,
        };

        if let Some(home) = home {
            candidates.push(
                home.join(".local")
                    .join("share")
                    .join(SHARE_DIR_NAME)
                    .join(name),
            );
        }

        candidates.dedup();
        let primary = primary
            .or_else(|| candidates.first().cloned())
            .unwrap_or_else(|| PathBuf::from(name));

        Self {
            primary,
            candidates,
        }
    }

    /// Return the first candidate that exists on disk.
    pub fn find(&self) -> Result<PathBuf> {
        self.candidates
            .iter()
            .find(|candidate| candidate.is_file())
            .cloned()
            .ok_or_else(|| LauncherError::MissingScript {
                path: self.primary.clone(),
                searched: self.candidates.clone(),
            })
    }
}

/// Directory containing the running executable, with symlinks resolved.
pub fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        LauncherError::UserError(format!("failed to determine launcher location: {}", e))
    })?;
    let exe = exe.canonicalize().unwrap_or(exe);

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LauncherError::UserError(format!(
            "launcher path '{}' has no parent directory",
            exe.display()
        ))
    })
}

/// The package directory: one level above the launcher's install directory.
pub fn package_dir_of(install_dir: &Path) -> PathBuf {
    install_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| install_dir.to_path_buf())
}

/// Locate the install script.
///
/// An explicit path bypasses the search entirely. `home` is the user's home
/// directory as resolved by the caller.
pub fn locate_script(
    config: &Config,
    explicit: Option<&Path>,
    package_dir: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    let search = match explicit {
        Some(path) => ScriptSearch::explicit(path.to_path_buf()),
        None => ScriptSearch::new(config, package_dir, home),
    };

    search.find()
}

/// Package directory for this run.
///
/// Failing to resolve the launcher's own location only matters when the
/// script has to be searched for; an explicit script path does not need it.
pub fn resolve_package_dir(
    install_dir: Result<PathBuf>,
    has_explicit_script: bool,
) -> Result<Option<PathBuf>> {
    match install_dir {
        Ok(dir) => Ok(Some(package_dir_of(&dir))),
        Err(_) if has_explicit_script => Ok(None),
        Err(e) => Err(e),
    }
}

/// Expand `~` in a user-supplied script path.
pub fn script_path_arg(raw: &str) -> PathBuf {
    expand_home(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn package_dir_is_one_level_up() {
        assert_eq!(
            package_dir_of(Path::new("/opt/claude-parallel/bin")),
            PathBuf::from("/opt/claude-parallel")
        );
    }

    #[test]
    fn install_dir_contains_current_exe() {
        let dir = install_dir().unwrap();
        let exe = env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(exe.parent().unwrap(), dir);
    }

    #[test]
    fn search_order_puts_config_dirs_first() {
        let config = Config {
            search_dirs: vec!["/custom".to_string()],
            ..Config::default()
        };
        let search =
            ScriptSearch::new(&config, Some(Path::new("/pkg")), Some(Path::new("/home/u")));

        assert_eq!(search.primary, PathBuf::from("/pkg/install.sh"));
        assert_eq!(
            search.candidates,
            vec![
                PathBuf::from("/custom/install.sh"),
                PathBuf::from("/pkg/install.sh"),
                PathBuf::from("/pkg/share/claude-parallel/install.sh"),
                PathBuf::from("/home/u/.local/share/claude-parallel/install.sh"),
            ]
        );
    }

    #[test]
    fn search_uses_configured_script_name() {
        let config = Config {
            script_name: "setup.sh".to_string(),
            ..Config::default()
        };
        let search = ScriptSearch::new(&config, Some(Path::new("/pkg")), None);
        assert_eq!(search.primary, PathBuf::from("/pkg/setup.sh"));
    }

    #[test]
    fn search_without_package_dir_falls_back_to_first_candidate() {
        let config = Config::default();
        let search = ScriptSearch::new(&config, None, Some(Path::new("/home/u")));
        assert_eq!(
            search.primary,
            PathBuf::from("/home/u/.local/share/claude-parallel/install.sh")
        );
    }

    #[test]
    fn nowhere_to_search_is_a_missing_script() {
        let search = ScriptSearch::new(&Config::default(), None, None);
        assert!(search.candidates.is_empty());

        match locate_script(&Config::default(), None, None, None).unwrap_err() {
            LauncherError::MissingScript { path, searched } => {
                assert_eq!(path, PathBuf::from("install.sh"));
                assert!(searched.is_empty());
            }
            other => panic!("expected MissingScript, got {:?}", other),
        }
    }

    #[test]
    fn home_share_dir_is_searched() {
        let pkg = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let script = home.path().join(".local/share/claude-parallel/install.sh");
        touch(&script);

        let found =
            locate_script(&Config::default(), None, Some(pkg.path()), Some(home.path())).unwrap();
        assert_eq!(found, script);
    }

    #[test]
    fn unresolved_install_dir_is_fatal_without_explicit_script() {
        let failed = || -> Result<PathBuf> { Err(LauncherError::UserError("no exe".to_string())) };

        let err = resolve_package_dir(failed(), false).unwrap_err();
        assert!(err.to_string().contains("no exe"));

        assert_eq!(resolve_package_dir(failed(), true).unwrap(), None);
        assert_eq!(
            resolve_package_dir(Ok(PathBuf::from("/opt/cp/bin")), false).unwrap(),
            Some(PathBuf::from("/opt/cp"))
        );
    }

    #[test]
    fn find_prefers_primary_over_share_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path();
        touch(&pkg.join("install.sh"));
        touch(&pkg.join("share/claude-parallel/install.sh"));

        let search = ScriptSearch::new(&Config::default(), Some(pkg), None);
        assert_eq!(search.find().unwrap(), pkg.join("install.sh"));
    }

    #[test]
    fn find_falls_back_to_share_dir() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path();
        touch(&pkg.join("share/claude-parallel/install.sh"));

        let search = ScriptSearch::new(&Config::default(), Some(pkg), None);
        assert_eq!(
            search.find().unwrap(),
            pkg.join("share/claude-parallel/install.sh")
        );
    }

    #[test]
    fn find_reports_primary_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path();

        let search = ScriptSearch::new(&Config::default(), Some(pkg), None);
        match search.find().unwrap_err() {
            LauncherError::MissingScript { path, searched } => {
                assert_eq!(path, pkg.join("install.sh"));
                assert_eq!(searched.len(), 2);
            }
            other => panic!("expected MissingScript, got {:?}", other),
        }
    }

    #[test]
    fn directories_are_not_scripts() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("install.sh")).unwrap();

        let search = ScriptSearch::explicit(temp_dir.path().join("install.sh"));
        assert!(search.find().is_err());
    }

    #[test]
    fn explicit_path_is_the_only_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("custom.sh");
        touch(&script);

        let found = locate_script(&Config::default(), Some(script.as_path()), None, None).unwrap();
        assert_eq!(found, script);

        let missing = temp_dir.path().join("missing.sh");
        let err = locate_script(
            &Config::default(),
            Some(missing.as_path()),
            Some(temp_dir.path()),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing.sh"));
    }
}
