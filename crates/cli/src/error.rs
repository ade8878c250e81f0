// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the pkgq CLI.
///
/// Filter problems are not errors here: terms that do not form a filter are
/// kept as search text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("config file not found: {}\n  hint: omit --config to use defaults", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for pkgq CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
