//! ssh command line assembly
//!
//! `ssh [-p PORT] [-i IDENTITY] [-J JUMP] [EXTRA] [user@]host`
//!
//! Structured fields are quoted for the shell only when they contain
//! shell-special characters, so ordinary values render verbatim.
//! `extra_args` is emitted as one raw token and is interpreted by the shell
//! that eventually runs the line: anything the user puts there, including
//! metacharacters, is executed as written.

use std::fmt;

use crate::config::{Profile, DEFAULT_PORT};

const SSH_PROGRAM: &str = "ssh";

/// One piece of an ssh invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single argument; quoted on render if needed
    Arg(String),
    /// Passed through to the shell exactly as written
    Raw(String),
}

impl Token {
    fn render(&self) -> String {
        match self {
            Token::Arg(value) => shell_words::quote(value).into_owned(),
            Token::Raw(value) => value.clone(),
        }
    }
}

/// Typed ssh invocation built from a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshCommand {
    tokens: Vec<Token>,
}

impl SshCommand {
    /// Build the invocation for `profile`. Pure and deterministic.
    pub fn build(profile: &Profile) -> Self {
        let mut tokens = vec![Token::Arg(SSH_PROGRAM.to_string())];

        if profile.port != 0 && profile.port != DEFAULT_PORT {
            tokens.push(Token::Arg("-p".into()));
            tokens.push(Token::Arg(profile.port.to_string()));
        }

        if !profile.identity_file.is_empty() {
            tokens.push(Token::Arg("-i".into()));
            tokens.push(Token::Arg(profile.identity_file.clone()));
        }

        if !profile.jump_host.is_empty() {
            tokens.push(Token::Arg("-J".into()));
            tokens.push(Token::Arg(profile.jump_host.clone()));
        }

        if !profile.extra_args.is_empty() {
            tokens.push(Token::Raw(profile.extra_args.clone()));
        }

        tokens.push(Token::Arg(profile.target()));

        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Shell command line, tokens joined by single spaces
    pub fn command_line(&self) -> String {
        self.tokens
            .iter()
            .map(Token::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SshCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Shortcut for `SshCommand::build(profile).command_line()`
pub fn build_command(profile: &Profile) -> String {
    SshCommand::build(profile).command_line()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_profile() {
        let profile = Profile::new("web1", "10.0.0.5")
            .with_user("alice")
            .with_port(2222)
            .with_identity_file("/home/a/.ssh/id")
            .with_extra_args("-A");

        assert_eq!(build_command(&profile), "ssh -p 2222 -i /home/a/.ssh/id -A alice@10.0.0.5");
    }

    #[test]
    fn test_minimal_profile() {
        assert_eq!(build_command(&Profile::new("x", "h")), "ssh h");
    }

    #[test]
    fn test_port_flag_only_for_non_default_ports() {
        for port in [1u16, 21, 23, 2222, 65535] {
            let line = build_command(&Profile::new("x", "h").with_port(port));
            assert_eq!(line, format!("ssh -p {port} h"));
        }
        assert_eq!(build_command(&Profile::new("x", "h").with_port(22)), "ssh h");
        assert_eq!(build_command(&Profile::new("x", "h").with_port(0)), "ssh h");
    }

    #[test]
    fn test_token_order() {
        let profile = Profile::new("x", "h")
            .with_user("u")
            .with_port(2200)
            .with_identity_file("/home/u/.ssh/id_ed25519")
            .with_jump_host("admin@bastion:2022")
            .with_extra_args("-A -o ServerAliveInterval=60");

        assert_eq!(
            build_command(&profile),
            "ssh -p 2200 -i /home/u/.ssh/id_ed25519 -J admin@bastion:2022 -A -o ServerAliveInterval=60 u@h"
        );
    }

    #[test]
    fn test_extra_args_stay_one_raw_token() {
        let profile = Profile::new("x", "h").with_extra_args("-L 8080:localhost:80 -N");
        let command = SshCommand::build(&profile);

        assert_eq!(
            command.tokens(),
            &[
                Token::Arg("ssh".into()),
                Token::Raw("-L 8080:localhost:80 -N".into()),
                Token::Arg("h".into()),
            ]
        );
    }

    #[test]
    fn test_structured_fields_are_quoted_when_unsafe() {
        let profile = Profile::new("x", "h; rm -rf ~").with_identity_file("/keys/my key");
        assert_eq!(build_command(&profile), "ssh -i '/keys/my key' 'h; rm -rf ~'");

        let profile = Profile::new("x", "h").with_user("o'neil");
        assert_eq!(build_command(&profile), r"ssh 'o'\''neil@h'");
    }

    #[test]
    fn test_build_is_deterministic() {
        let profile = Profile::new("x", "h").with_user("u").with_port(2222);
        assert_eq!(SshCommand::build(&profile), SshCommand::build(&profile));
        assert_eq!(build_command(&profile), build_command(&profile));
        assert_eq!(SshCommand::build(&profile).to_string(), build_command(&profile));
    }
}
