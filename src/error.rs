use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManagerError>;

/// Reasons a profile is rejected before it reaches the collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Host is required")]
    MissingHost,

    #[error("Port must be between 1 and 65535 (got {0})")]
    InvalidPort(u32),
}

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Invalid profile: {0}")]
    Validation(#[from] ValidationError),

    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    #[error(
        "Could not find a supported terminal emulator. Install one of: {}",
        .supported.join(", ")
    )]
    NoTerminalFound { supported: Vec<&'static str> },

    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write profiles to {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
