//! Terminal launcher - open a terminal emulator running a command
//!
//! Discovery walks a fixed priority table of emulators and picks the first
//! one found on the search path. Spawning is fire-and-forget: the child is
//! detached and never waited on.

mod lookup;
mod table;

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{ManagerError, Result};

pub use lookup::SearchPath;
pub use table::{supported_terminals, CommandStyle, TerminalSpec, TERMINALS};

/// Appended to the session command so the window stays open afterwards
pub const PAUSE_EPILOGUE: &str = "; echo; echo 'Session ended. Press Enter to close...'; read";

/// Trait for resolving executable names
pub trait ExecutableLookup {
    /// Full path of `program`, if it can be run
    fn find(&self, program: &str) -> Option<PathBuf>;
}

/// A terminal chosen to run a particular command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalInvocation {
    pub terminal: &'static TerminalSpec,
    /// Where the executable was found
    pub path: PathBuf,
    pub argv: Vec<String>,
}

/// Command run inside the terminal: the session plus the pause prompt
pub fn session_command(command_line: &str) -> String {
    format!("{command_line}{PAUSE_EPILOGUE}")
}

/// Finds a terminal emulator and starts it
#[derive(Debug, Clone)]
pub struct TerminalLauncher<L = SearchPath> {
    lookup: L,
}

impl TerminalLauncher<SearchPath> {
    /// Launcher that searches the current `PATH`
    pub fn from_env() -> Self {
        Self::new(SearchPath::from_env())
    }
}

impl<L: ExecutableLookup> TerminalLauncher<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// First available terminal, with the argv that runs `command` in it
    pub fn discover(&self, command: &str) -> Option<TerminalInvocation> {
        let found = TERMINALS.iter().find_map(|terminal| {
            self.lookup.find(terminal.program).map(|path| TerminalInvocation {
                terminal,
                path,
                argv: terminal.argv(command),
            })
        });

        match &found {
            Some(invocation) => tracing::debug!(
                terminal = invocation.terminal.program,
                path = %invocation.path.display(),
                "terminal found"
            ),
            None => tracing::debug!("no supported terminal found"),
        }

        found
    }

    /// Every supported terminal present on this host, in priority order
    pub fn available(&self) -> Vec<(&'static TerminalSpec, PathBuf)> {
        TERMINALS
            .iter()
            .filter_map(|terminal| self.lookup.find(terminal.program).map(|p| (terminal, p)))
            .collect()
    }

    /// Start a previously discovered argv; see [`spawn`]
    pub fn spawn(&self, argv: &[String]) -> Result<u32> {
        spawn(argv)
    }

    /// Open a terminal running `command_line` followed by the pause prompt
    pub fn launch(&self, command_line: &str) -> Result<TerminalInvocation> {
        let invocation = self
            .discover(&session_command(command_line))
            .ok_or_else(|| ManagerError::NoTerminalFound {
                supported: supported_terminals(),
            })?;

        spawn(&invocation.argv)?;
        Ok(invocation)
    }
}

/// Start `argv` detached from this process. Returns the child's pid.
pub fn spawn(argv: &[String]) -> Result<u32> {
    let (program, args) = argv.split_first().ok_or_else(|| ManagerError::LaunchFailed {
        program: String::new(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
    })?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command.spawn().map_err(|source| ManagerError::LaunchFailed {
        program: program.clone(),
        source,
    })?;

    let pid = child.id();
    tracing::info!(program = %program, pid, "terminal started");
    Ok(pid)
}
