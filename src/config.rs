//! Server configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("SITE_ROOT is empty")]
    EmptySiteRoot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides Leptos' configured site root when set.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `PORT` and `SITE_ROOT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_root = match lookup("SITE_ROOT") {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::EmptySiteRoot),
            Some(value) => Some(PathBuf::from(value.trim())),
            None => None,
        };
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
