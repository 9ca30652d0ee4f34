//! Opening a profile in a terminal window

use colored::Colorize;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::ssh::build_command;
use crate::terminal::{supported_terminals, TerminalLauncher};

use super::{open_catalogue, resolve};

pub fn run(config: StoreConfig, name: &str) -> Result<()> {
    let catalogue = open_catalogue(config);
    let index = resolve(&catalogue, name)?;
    let Some(profile) = catalogue.get(index) else {
        return Ok(());
    };

    let command_line = build_command(profile);
    println!("{} {}", "Connecting:".cyan(), command_line.bold());

    let invocation = TerminalLauncher::from_env().launch(&command_line)?;
    println!(
        "{}",
        format!("Opened in {}", invocation.terminal.program).dimmed()
    );

    Ok(())
}

/// Show which supported terminals are installed
pub fn terminals() -> Result<()> {
    let launcher = TerminalLauncher::from_env();
    let available = launcher.available();

    println!("{}", "Supported terminals (in priority order):".cyan().bold());
    println!();

    for program in supported_terminals() {
        match available.iter().find(|(t, _)| t.program == program) {
            Some((_, path)) => println!("  {} {:<16} {}", "✓".green(), program, path.display()),
            None => println!("  {} {}", "✗".dimmed(), program.dimmed()),
        }
    }

    if available.is_empty() {
        println!();
        println!("{}", "None installed - connect will not work.".yellow());
    }

    Ok(())
}
