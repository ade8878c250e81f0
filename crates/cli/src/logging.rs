// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PKGQ_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Picks the filter directive: `PKGQ_LOG`, then the config file, then `warn`.
pub fn directive(env: Option<String>, config: &Config) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| config.log.clone())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(config: &Config) {
    let directive = directive(std::env::var(LOG_ENV).ok(), config);
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
