//! SSH GUI Manager - a personal catalogue of SSH connection profiles
//!
//! This crate provides the non-visual core of the manager:
//! - The profile model and its JSON storage
//! - Building an ssh command line from a profile
//! - Finding a terminal emulator and launching the command in it
//! - A catalogue that keeps the collection and its file in sync

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ssh;
pub mod terminal;

pub use catalogue::ProfileCatalogue;
pub use config::{Profile, ProfileList, ProfileStore, StoreConfig};
pub use error::{ManagerError, Result, ValidationError};
pub use ssh::{build_command, SshCommand};
pub use terminal::TerminalLauncher;
