//! Configuration loading and typed config structures for the shop.
//!
//! The canonical configuration lives in `hangar.yaml` at the project root.
//! This module defines strongly-typed structs that mirror the YAML
//! structure and provides a loader that reads the file. Every field has a
//! default, so partial files are valid.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level shop configuration.
///
/// Mirrors the structure of `hangar.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShopConfig {
    /// Session-level settings (name, starting balance).
    #[serde(default)]
    pub session: SessionConfig,

    /// The upgrades available this session, in declaration order.
    #[serde(default)]
    pub upgrades: Vec<UpgradeDef>,
}

impl ShopConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Session-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Human-readable session name.
    #[serde(default = "default_session_name")]
    pub name: String,

    /// Credits the wallet starts with.
    #[serde(default = "default_starting_credits")]
    pub starting_credits: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_session_name(),
            starting_credits: default_starting_credits(),
        }
    }
}

fn default_session_name() -> String {
    String::from("hangar")
}

const fn default_starting_credits() -> u64 {
    0
}

/// One upgrade definition seeded into the catalog at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpgradeDef {
    /// Display name, unique within the session.
    pub name: String,

    /// Purchase price in credits.
    #[serde(default)]
    pub cost: u64,
}
