// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pkgq_core::{build_sql, try_parse_filter};

use crate::error::Result;

pub fn run(term: &str) -> Result<()> {
    println!("{}", explain(term));
    Ok(())
}

/// Describes the filter a term builds, or why it stays search text.
pub(crate) fn explain(term: &str) -> String {
    match try_parse_filter(term) {
        Ok(filter) => {
            let compiled = filter.compile();
            let clause = build_sql(std::slice::from_ref(&compiled));
            format!(
                "filter: {}\nsql: {}",
                compiled.display_label(),
                clause.sql
            )
        }
        Err(rejection) => format!("search text: {}", rejection),
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
