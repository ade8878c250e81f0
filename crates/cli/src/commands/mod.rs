// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod explain;
pub mod keys;
pub mod parse;
pub mod schema;
pub mod sql;

use serde::Serialize;

use crate::error::Result;

/// Query arguments are joined and re-split on whitespace, so quoted and
/// unquoted queries behave the same.
fn join_query(query: &[String]) -> String {
    query.join(" ")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
