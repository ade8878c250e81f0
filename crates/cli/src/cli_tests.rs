// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parse_collects_query_terms() {
    let cli = Cli::try_parse_from(["pkgq", "parse", "swift", "stars:>500", "--stats"]).unwrap();
    let Command::Parse {
        query,
        stats,
        output,
    } = cli.command
    else {
        panic!("expected parse command");
    };
    assert_eq!(query, vec!["swift", "stars:>500"]);
    assert!(stats);
    assert_eq!(output, None);
}

#[test]
fn parse_requires_a_query() {
    assert!(Cli::try_parse_from(["pkgq", "parse"]).is_err());
}

#[test]
fn sql_accepts_offset_and_output() {
    let cli =
        Cli::try_parse_from(["pkgq", "sql", "stars:5", "--offset", "2", "-o", "json"]).unwrap();
    let Command::Sql { offset, output, .. } = cli.command else {
        panic!("expected sql command");
    };
    assert_eq!(offset, Some(2));
    assert_eq!(output, Some(OutputFormat::Json));
}

#[test]
fn config_flag_is_global() {
    let cli = Cli::try_parse_from(["pkgq", "keys", "--config", "/tmp/pkgq.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/pkgq.toml")));
}
