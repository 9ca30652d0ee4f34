//! Configuration management for ssh-gui-manager
//!
//! Handles:
//! - The connection profile model
//! - JSON storage of the profile collection

mod profile;
mod storage;

pub use profile::{Profile, ProfileList, DEFAULT_PORT};
pub use storage::{LoadOutcome, LoadWarning, ProfileStore, StoreConfig};
