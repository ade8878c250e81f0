// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `--config <path>` or, when that flag is absent,
//! from `<config_dir>/pkgq/config.toml`:
//!
//! ```toml
//! output = "json"        # default output format: "text" or "json"
//! log = "pkgq_core=debug" # tracing filter directive, overridden by PKGQ_LOG
//!
//! [sql]
//! placeholder_offset = 2  # first placeholder becomes $3
//! ```
//!
//! A missing default file means defaults. A missing explicit file is an
//! error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "pkgq";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format used when `--output` is not given.
    pub output: OutputFormat,
    /// Tracing filter directive used when `PKGQ_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    pub sql: SqlConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqlConfig {
    /// Placeholders already used by the query the WHERE clause is added to.
    pub placeholder_offset: usize,
}

impl Config {
    /// Loads configuration from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_file(path)?.ok_or_else(|| Error::ConfigNotFound(path.into())),
            None => match default_path() {
                Some(path) => Ok(Self::load_file(&path)?.unwrap_or_default()),
                None => Ok(Config::default()),
            },
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns `None` if the file does not exist.
    fn load_file(path: &Path) -> Result<Option<Config>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config = Self::parse(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Some(config))
    }
}

/// `<config_dir>/pkgq/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
