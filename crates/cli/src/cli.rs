// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "pkgq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile package search queries into filters and SQL")]
#[command(
    long_about = "Compile package search queries into filters and SQL.\n\n\
    Terms of the form key:value (for example stars:>500 or license:!gpl) become typed\n\
    filters. Everything else, including terms whose filter cannot be built, stays search text."
)]
pub struct Cli {
    /// Read configuration from <path> instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a query into search terms and filters
    #[command(after_help = "\
Examples:
  pkgq parse swift stars:>500            One search term, one filter
  pkgq parse 'http platform:ios,linux'   Quoted queries are split on whitespace
  pkgq parse license:compatible -o json  Show compiled filters as JSON
  pkgq parse type:library --stats        Count filters per key")]
    Parse {
        /// Query terms
        #[arg(required = true, value_name = "query")]
        query: Vec<String>,

        /// Print how many filters were built for each key
        #[arg(long)]
        stats: bool,

        /// Output format (defaults to the configured format)
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Render a query's filters as a PostgreSQL WHERE clause
    #[command(after_help = "\
Examples:
  pkgq sql stars:>500 license:mit        WHERE clause with two binds
  pkgq sql keyword:!ui --offset 2        Start placeholders at $3")]
    Sql {
        /// Query terms
        #[arg(required = true, value_name = "query")]
        query: Vec<String>,

        /// Number of placeholders already used by the surrounding query
        #[arg(long, value_name = "n")]
        offset: Option<usize>,

        /// Output format (defaults to the configured format)
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Explain how a single term is interpreted
    Explain {
        /// A single term, e.g. stars:>500
        term: String,
    },

    /// List filter keys with their operators and examples
    Keys,

    /// Output JSON Schema for commands with JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'pkgq parse -o json' output
    Parse,
    /// Output JSON Schema for 'pkgq sql -o json' output
    Sql,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
