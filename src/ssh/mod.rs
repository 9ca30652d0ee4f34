//! Turning profiles into ssh command lines

mod command;

pub use command::{build_command, SshCommand, Token};
