//! CLI command implementations

pub mod connect;
pub mod profile;

use std::io::{self, Write};

use colored::Colorize;

use crate::catalogue::ProfileCatalogue;
use crate::config::{ProfileStore, StoreConfig};
use crate::error::{ManagerError, Result};

/// Open the catalogue, telling the user if the stored file had to be ignored
pub fn open_catalogue(config: StoreConfig) -> ProfileCatalogue {
    let catalogue = ProfileCatalogue::open(ProfileStore::new(config));

    if let Some(warning) = catalogue.load_warning() {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
        eprintln!("Starting with an empty profile list; saving will overwrite the file.");
    }

    catalogue
}

/// Index of the profile called `name`
pub fn resolve(catalogue: &ProfileCatalogue, name: &str) -> Result<usize> {
    catalogue
        .find(name)
        .ok_or_else(|| ManagerError::ProfileNotFound(name.to_string()))
}

/// Ask a yes/no question
pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
