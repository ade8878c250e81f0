// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{parse, sql};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Parse => schema_for!(parse::ParseOutputJson),
        SchemaCommand::Sql => schema_for!(sql::SqlOutputJson),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
