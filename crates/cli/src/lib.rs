// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pkgq - command-line front end for the package search filter compiler.
//!
//! The filter logic lives in `pkgq-core`; this crate adds configuration
//! and output formatting around it.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definition of the `pkgq` command line
//! - [`Config`] - user configuration loaded from TOML
//! - [`Error`] - Error types for all operations

mod cli;
mod commands;
mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Loads configuration, installs logging and runs `cli.command`.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config);

    match cli.command {
        Command::Parse {
            query,
            stats,
            output,
        } => commands::parse::run(&query, stats, output.unwrap_or(config.output)),
        Command::Sql {
            query,
            offset,
            output,
        } => commands::sql::run(
            &query,
            offset.unwrap_or(config.sql.placeholder_offset),
            output.unwrap_or(config.output),
        ),
        Command::Explain { term } => commands::explain::run(&term),
        Command::Keys => commands::keys::run(),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "pkgq", &mut std::io::stdout());
            Ok(())
        }
    }
}
