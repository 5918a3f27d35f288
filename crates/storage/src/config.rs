// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration
//!
//! Read from an optional TOML file; `LH_DATABASE_PATH` overrides the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the SQLite database file
pub const DATABASE_PATH_ENV: &str = "LH_DATABASE_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite file; `None` runs on fallback data only
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        // Relative database paths resolve against the config file's directory
        if let (Some(db), Some(dir)) = (&config.database_path, path.parent()) {
            if db.is_relative() {
                config.database_path = Some(dir.join(db));
            }
        }
        Ok(config)
    }

    /// Apply an override value; blank values are ignored
    pub fn with_override(mut self, database_path: Option<String>) -> Self {
        if let Some(value) = database_path.filter(|v| !v.trim().is_empty()) {
            self.database_path = Some(PathBuf::from(value));
        }
        self
    }

    /// File (if given) then environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_override(std::env::var(DATABASE_PATH_ENV).ok()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
