use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use ssh_gui_manager::cli::{self, profile::ProfileFields};
use ssh_gui_manager::{logging, Result, StoreConfig};

#[derive(Parser)]
#[command(name = "ssh-gui-manager")]
#[command(author = "Oleg")]
#[command(version)]
#[command(about = "Keep SSH connection profiles and open them in a terminal", long_about = None)]
struct Cli {
    /// Directory holding profiles.json
    #[arg(long, global = true, env = "SSH_GUI_MANAGER_DIR")]
    config_dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List profiles, optionally filtered by a search term
    List {
        /// Matched against name, host, user, jump host and extra args
        search: Option<String>,
    },

    /// Show a profile's details and command line
    Show {
        name: String,
    },

    /// Add a new profile
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Hostname or IP address
        #[arg(short = 'H', long)]
        host: String,

        #[command(flatten)]
        fields: ProfileFields,
    },

    /// Change an existing profile
    Edit {
        /// Profile to change
        name: String,

        /// New display name
        #[arg(short = 'n', long = "name")]
        new_name: Option<String>,

        /// New host
        #[arg(short = 'H', long)]
        host: Option<String>,

        #[command(flatten)]
        fields: ProfileFields,
    },

    /// Delete a profile
    Remove {
        name: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a profile as "<name> (copy)"
    Duplicate {
        name: String,
    },

    /// Print the ssh command for a profile
    Command {
        name: String,
    },

    /// Open a profile in a terminal window
    Connect {
        name: String,
    },

    /// Show which supported terminal emulators are installed
    Terminals,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config_dir {
        Some(dir) => StoreConfig::new(dir),
        None => StoreConfig::default_location()?,
    };

    match cli.command {
        Commands::List { search } => cli::profile::list(config, search),
        Commands::Show { name } => cli::profile::show(config, &name),
        Commands::Add { name, host, fields } => cli::profile::add(config, name, host, fields),
        Commands::Edit {
            name,
            new_name,
            host,
            fields,
        } => cli::profile::edit(config, &name, new_name, host, fields),
        Commands::Remove { name, yes } => cli::profile::remove(config, &name, yes),
        Commands::Duplicate { name } => cli::profile::duplicate(config, &name),
        Commands::Command { name } => cli::profile::command(config, &name),
        Commands::Connect { name } => cli::connect::run(config, &name),
        Commands::Terminals => cli::connect::terminals(),
    }
}
