//! Profile management commands

use clap::Args;
use colored::Colorize;

use crate::config::{Profile, StoreConfig};
use crate::error::{ManagerError, Result};
use crate::ssh::build_command;

use super::{confirm, open_catalogue, resolve};

/// Optional profile fields shared by `add` and `edit`
#[derive(Debug, Default, Clone, Args)]
pub struct ProfileFields {
    /// Login user (empty string clears it)
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// SSH port
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Private key file
    #[arg(short = 'i', long = "identity")]
    pub identity_file: Option<String>,

    /// Jump host for -J
    #[arg(short = 'j', long = "jump")]
    pub jump_host: Option<String>,

    /// Extra ssh arguments, passed through unchanged
    #[arg(short = 'e', long = "extra", allow_hyphen_values = true)]
    pub extra_args: Option<String>,
}

impl ProfileFields {
    fn apply(self, profile: &mut Profile) {
        if let Some(user) = self.user {
            profile.user = user;
        }
        if let Some(port) = self.port {
            profile.port = port;
        }
        if let Some(identity_file) = self.identity_file {
            profile.identity_file = identity_file;
        }
        if let Some(jump_host) = self.jump_host {
            profile.jump_host = jump_host;
        }
        if let Some(extra_args) = self.extra_args {
            profile.extra_args = extra_args;
        }
    }
}

/// List profiles, optionally filtered
pub fn list(config: StoreConfig, term: Option<String>) -> Result<()> {
    let catalogue = open_catalogue(config);

    if catalogue.is_empty() {
        println!("No profiles configured.");
        println!();
        println!("Run {} to add one.", "ssh-gui-manager add".cyan());
        return Ok(());
    }

    let hits = catalogue.search(term.as_deref().unwrap_or_default());
    if hits.is_empty() {
        println!("No profiles match.");
        return Ok(());
    }

    for (_, profile) in hits {
        println!("{}", profile.display());
    }

    Ok(())
}

/// Show every field of one profile and its command line
pub fn show(config: StoreConfig, name: &str) -> Result<()> {
    let catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;
    let Some(profile) = catalogue.get(index) else {
        return Ok(());
    };

    let or_none = |value: &str| {
        if value.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            value.to_string()
        }
    };

    println!("{}", profile.name.bold());
    println!();
    println!("{:<12} {}", "Host:".bold(), profile.host);
    println!("{:<12} {}", "User:".bold(), or_none(&profile.user));
    println!("{:<12} {}", "Port:".bold(), profile.port);
    println!("{:<12} {}", "Identity:".bold(), or_none(&profile.identity_file));
    println!("{:<12} {}", "Jump:".bold(), or_none(&profile.jump_host));
    println!("{:<12} {}", "Extra args:".bold(), or_none(&profile.extra_args));
    println!();
    println!("{}", "Command:".bold());
    println!("  {}", build_command(profile).cyan());

    Ok(())
}

/// Add a new profile
pub fn add(config: StoreConfig, name: String, host: String, fields: ProfileFields) -> Result<()> {
    let mut catalogue = open_catalogue(config);

    let mut profile = Profile::new(name, host);
    fields.apply(&mut profile);

    let index = catalogue.add(profile)?;
    if let Some(added) = catalogue.get(index) {
        println!("{} Profile '{}' added.", "Success:".green().bold(), added.name);
    }

    Ok(())
}

/// Change fields of an existing profile
pub fn edit(
    config: StoreConfig,
    name: &str,
    new_name: Option<String>,
    host: Option<String>,
    fields: ProfileFields,
) -> Result<()> {
    let mut catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;

    let mut updated = catalogue
        .get(index)
        .cloned()
        .ok_or_else(|| ManagerError::ProfileNotFound(name.to_string()))?;
    if let Some(new_name) = new_name {
        updated.name = new_name;
    }
    if let Some(host) = host {
        updated.host = host;
    }
    fields.apply(&mut updated);

    let stored = catalogue.edit(index, updated)?;
    println!("{} Profile '{}' updated.", "Success:".green().bold(), stored.name);

    Ok(())
}

/// Delete a profile after confirmation
pub fn remove(config: StoreConfig, name: &str, yes: bool) -> Result<()> {
    let mut catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;

    if !yes && !confirm(&format!("Delete '{}'?", name)) {
        println!("Cancelled.");
        return Ok(());
    }

    catalogue.delete(index)?;
    println!("{} Profile '{}' deleted.", "Success:".green().bold(), name);

    Ok(())
}

/// Copy a profile under "<name> (copy)"
pub fn duplicate(config: StoreConfig, name: &str) -> Result<()> {
    let mut catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;

    let new_index = catalogue.duplicate(index)?;
    if let Some(copy) = catalogue.get(new_index) {
        println!("{} Created '{}'.", "Success:".green().bold(), copy.name);
    }

    Ok(())
}

/// Print the ssh command line for a profile
pub fn command(config: StoreConfig, name: &str) -> Result<()> {
    let catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;

    if let Some(profile) = catalogue.get(index) {
        println!("{}", build_command(profile));
    }

    Ok(())
}
