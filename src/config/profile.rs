//! Connection profile structures

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Port used when a record does not say otherwise
pub const DEFAULT_PORT: u16 = 22;

/// A single saved connection target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name (e.g. "web1")
    #[serde(default, deserialize_with = "trimmed")]
    pub name: String,
    /// Hostname or IP address
    #[serde(default, deserialize_with = "trimmed")]
    pub host: String,
    /// Login user; empty lets ssh pick its default
    #[serde(default, deserialize_with = "trimmed")]
    pub user: String,
    /// SSH port (default: 22)
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,
    /// Path to a private key
    #[serde(default, deserialize_with = "trimmed")]
    pub identity_file: String,
    /// Intermediary host for `-J`
    #[serde(default, deserialize_with = "trimmed")]
    pub jump_host: String,
    /// Raw flags passed through to ssh untouched (e.g. "-A -o ServerAliveInterval=60")
    #[serde(default, deserialize_with = "trimmed")]
    pub extra_args: String,
}

impl Profile {
    /// Create a profile with default port and no optional fields
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            user: String::new(),
            port: DEFAULT_PORT,
            identity_file: String::new(),
            jump_host: String::new(),
            extra_args: String::new(),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_identity_file(mut self, path: impl Into<String>) -> Self {
        self.identity_file = path.into();
        self
    }

    pub fn with_jump_host(mut self, jump_host: impl Into<String>) -> Self {
        self.jump_host = jump_host.into();
        self
    }

    pub fn with_extra_args(mut self, extra_args: impl Into<String>) -> Self {
        self.extra_args = extra_args.into();
        self
    }

    /// Both name and host are present
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.host.is_empty()
    }

    /// Copy of this profile with every text field trimmed
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            host: self.host.trim().to_string(),
            user: self.user.trim().to_string(),
            port: self.port,
            identity_file: self.identity_file.trim().to_string(),
            jump_host: self.jump_host.trim().to_string(),
            extra_args: self.extra_args.trim().to_string(),
        }
    }

    /// Check the invariants required before a profile is stored
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingHost);
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort(0));
        }
        Ok(())
    }

    /// `user@host`, or just `host` when no user is set
    pub fn target(&self) -> String {
        if self.user.is_empty() {
            self.host.clone()
        } else {
            format!("{}@{}", self.user, self.host)
        }
    }

    /// One-line label for list views: `name  —  user@host:port`
    pub fn display(&self) -> String {
        let port = if self.port != 0 && self.port != DEFAULT_PORT {
            format!(":{}", self.port)
        } else {
            String::new()
        };
        format!("{}  —  {}{}", self.name, self.target(), port)
    }

    /// Lowercased text matched by search
    pub fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.host.as_str(),
            self.user.as_str(),
            self.jump_host.as_str(),
            self.extra_args.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Numeric-like port representations found in hand-edited files
#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Int(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = match PortRepr::deserialize(deserializer)? {
        PortRepr::Int(n) => n,
        PortRepr::Float(f) if f.is_finite() => f.trunc() as i64,
        PortRepr::Float(f) => return Err(D::Error::custom(format!("invalid port: {f}"))),
        PortRepr::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid port: {s:?}")))?,
        PortRepr::Flag(b) => i64::from(b),
    };

    u16::try_from(raw).map_err(|_| D::Error::custom(format!("port out of range: {raw}")))
}

/// Ordered collection of profiles, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileList {
    pub profiles: Vec<Profile>,
}

impl ProfileList {
    /// Create an empty profile list
    pub fn new() -> Self {
        Self { profiles: Vec::new() }
    }

    /// Append a profile at the end
    pub fn push(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Remove the profile at `index`
    pub fn remove(&mut self, index: usize) -> Option<Profile> {
        if index < self.profiles.len() {
            Some(self.profiles.remove(index))
        } else {
            None
        }
    }

    /// Replace the profile at `index`, returning the old one
    pub fn replace(&mut self, index: usize, profile: Profile) -> Option<Profile> {
        self.profiles
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, profile))
    }

    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Position of the first profile with this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == name)
    }

    /// Drop records without a name or host, returning how many were dropped
    pub fn retain_complete(&mut self) -> usize {
        let before = self.profiles.len();
        self.profiles.retain(Profile::is_complete);
        before - self.profiles.len()
    }

    /// Case-insensitive substring filter; an empty term matches everything
    pub fn search(&self, term: &str) -> Vec<(usize, &Profile)> {
        let term = term.trim().to_lowercase();
        self.profiles
            .iter()
            .enumerate()
            .filter(|(_, p)| term.is_empty() || p.search_text().contains(&term))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }
}
