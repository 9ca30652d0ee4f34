//! JSON storage of the profile collection
//!
//! The whole collection lives in a single pretty-printed JSON array at
//! `<config dir>/ssh-gui-manager/profiles.json`. Every save rewrites the
//! file wholesale through a temporary sibling and a rename.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ManagerError, Result};

use super::{Profile, ProfileList};

const APP_DIR: &str = "ssh-gui-manager";
const PROFILES_FILE: &str = "profiles.json";
const TEMP_SUFFIX: &str = ".tmp";

/// Where the profile document is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    dir: PathBuf,
}

impl StoreConfig {
    /// Use an explicit directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Per-user default: `$XDG_CONFIG_HOME/ssh-gui-manager` (or `~/.config/...`)
    pub fn default_location() -> Result<Self> {
        dirs::config_dir()
            .map(|base| Self::new(base.join(APP_DIR)))
            .ok_or(ManagerError::NoConfigDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the profiles document
    pub fn profiles_path(&self) -> PathBuf {
        self.dir.join(PROFILES_FILE)
    }

    /// Create the directory if it is missing
    pub fn ensure_dir(&self) -> Result<&Path> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(&self.dir)
    }
}

/// Why a present profile document was ignored
#[derive(Debug)]
pub enum LoadWarning {
    Unreadable { path: PathBuf, source: std::io::Error },
    Malformed { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Unreadable { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            LoadWarning::Malformed { path, source } => {
                write!(f, "ignoring malformed {}: {}", path.display(), source)
            }
        }
    }
}

/// Result of loading: always a usable collection, plus a diagnostic when the
/// file existed but could not be used
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub profiles: ProfileList,
    pub warning: Option<LoadWarning>,
}

impl LoadOutcome {
    fn empty_with(warning: LoadWarning) -> Self {
        Self {
            profiles: ProfileList::new(),
            warning: Some(warning),
        }
    }
}

/// Reads and writes the profile document
#[derive(Debug, Clone)]
pub struct ProfileStore {
    config: StoreConfig,
}

impl ProfileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> PathBuf {
        self.config.profiles_path()
    }

    /// Load the collection.
    ///
    /// A missing file is an empty collection. An unreadable or unparsable
    /// file is also an empty collection, with the reason in `warning`.
    /// Text fields are trimmed and records without a name or host are
    /// dropped.
    pub fn load(&self) -> LoadOutcome {
        let path = self.path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no profile document yet");
            return LoadOutcome::default();
        }

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(source) => {
                let warning = LoadWarning::Unreadable { path, source };
                tracing::warn!("{warning}");
                return LoadOutcome::empty_with(warning);
            }
        };

        let mut profiles: ProfileList = match serde_json::from_str(&data) {
            Ok(profiles) => profiles,
            Err(source) => {
                let warning = LoadWarning::Malformed { path, source };
                tracing::warn!("{warning}");
                return LoadOutcome::empty_with(warning);
            }
        };

        let dropped = profiles.retain_complete();
        tracing::debug!(
            path = %path.display(),
            loaded = profiles.len(),
            dropped,
            "loaded profiles"
        );

        LoadOutcome {
            profiles,
            warning: None,
        }
    }

    /// Write the full collection, replacing the previous document.
    ///
    /// Text fields are written trimmed, the same form `load` returns, so
    /// saving what was loaded reproduces the document exactly.
    pub fn save(&self, profiles: &ProfileList) -> Result<()> {
        self.config.ensure_dir()?;

        let normalized = ProfileList {
            profiles: profiles.iter().map(Profile::normalized).collect(),
        };
        let json = serde_json::to_string_pretty(&normalized)?;
        let path = self.path();
        let tmp_path = self.temp_path();

        let write = || -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        };

        if let Err(source) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(ManagerError::Store { path, source });
        }

        tracing::debug!(path = %path.display(), count = profiles.len(), "saved profiles");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.config
            .dir()
            .join(format!("{PROFILES_FILE}{TEMP_SUFFIX}"))
    }
}
