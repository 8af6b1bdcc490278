use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A scratch package directory holding a fake install script.
pub(crate) struct FakePackage {
    pub(crate) dir: TempDir,
    pub(crate) script: PathBuf,
    pub(crate) args_file: PathBuf,
}

/// Create a package whose `install.sh` records its arguments and exits `code`.
///
/// The script writes each argument on its own line to `args.txt` and its
/// working directory to `cwd.txt`, both inside the package directory.
pub(crate) fn create_fake_package(code: i32) -> FakePackage {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("install.sh");
    let args_file = dir.path().join("args.txt");
    let cwd_file = dir.path().join("cwd.txt");

    let body = format!(
        "printf '%s\\n' \"$@\" > '{}'\npwd > '{}'\nexit {}\n",
        args_file.display(),
        cwd_file.display(),
        code
    );
    std::fs::write(&script, body).unwrap();

    FakePackage {
        dir,
        script,
        args_file,
    }
}

impl FakePackage {
    /// Arguments the script received, one per line; `None` if it never ran.
    pub(crate) fn recorded_args(&self) -> Option<Vec<String>> {
        std::fs::read_to_string(&self.args_file)
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    /// Working directory the script ran in.
    pub(crate) fn recorded_cwd(&self) -> Option<PathBuf> {
        std::fs::read_to_string(self.dir.path().join("cwd.txt"))
            .ok()
            .map(|content| PathBuf::from(content.trim_end()))
    }
}
