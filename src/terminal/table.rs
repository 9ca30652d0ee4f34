//! Supported terminal emulators and how each one is told to run a command

/// How the shell invocation is attached after the terminal's own flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStyle {
    /// `bash`, `-lc`, `CMD` as separate arguments
    Separate,
    /// One argument: `bash -lc 'CMD'`
    Joined,
}

/// One row of the terminal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSpec {
    /// Executable name looked up on `PATH`
    pub program: &'static str,
    /// Arguments placed between the program and the shell invocation
    pub flags: &'static [&'static str],
    pub style: CommandStyle,
}

/// Shell used inside the terminal window
const SHELL: &str = "bash";
const SHELL_FLAGS: &str = "-lc";

/// Checked in this order; first one present wins
pub const TERMINALS: &[TerminalSpec] = &[
    TerminalSpec {
        program: "gnome-terminal",
        flags: &["--"],
        style: CommandStyle::Separate,
    },
    TerminalSpec {
        program: "konsole",
        flags: &["-e"],
        style: CommandStyle::Separate,
    },
    TerminalSpec {
        program: "xfce4-terminal",
        flags: &["-e"],
        style: CommandStyle::Joined,
    },
    TerminalSpec {
        program: "xterm",
        flags: &["-e"],
        style: CommandStyle::Separate,
    },
    TerminalSpec {
        program: "kitty",
        flags: &[],
        style: CommandStyle::Separate,
    },
    TerminalSpec {
        program: "alacritty",
        flags: &["-e"],
        style: CommandStyle::Separate,
    },
    TerminalSpec {
        program: "wezterm",
        flags: &["start", "--"],
        style: CommandStyle::Separate,
    },
];

impl TerminalSpec {
    /// Full argv that opens this terminal running `command` in a login shell
    pub fn argv(&self, command: &str) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.flags.len() + 4);
        argv.push(self.program.to_string());
        argv.extend(self.flags.iter().map(|f| f.to_string()));

        match self.style {
            CommandStyle::Separate => {
                argv.push(SHELL.to_string());
                argv.push(SHELL_FLAGS.to_string());
                argv.push(command.to_string());
            }
            CommandStyle::Joined => {
                argv.push(format!("{SHELL} {SHELL_FLAGS} {}", shell_words::quote(command)));
            }
        }

        argv
    }
}

/// Names of every supported terminal, in priority order
pub fn supported_terminals() -> Vec<&'static str> {
    TERMINALS.iter().map(|t| t.program).collect()
}
