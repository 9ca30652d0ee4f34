//! Finding executables on the search path

use std::ffi::OsString;
use std::path::PathBuf;

use super::ExecutableLookup;

/// Searches a list of directories, like `PATH` resolution in a shell
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Directories from the current `PATH`
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH"))
    }

    pub fn from_path_var(path: Option<OsString>) -> Self {
        let dirs = path
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ExecutableLookup for SearchPath {
    fn find(&self, program: &str) -> Option<PathBuf> {
        if self.dirs.is_empty() {
            return None;
        }
        let joined = std::env::join_paths(&self.dirs).ok()?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(program, Some(joined), cwd).ok()
    }
}
