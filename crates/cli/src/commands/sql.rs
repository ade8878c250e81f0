// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pkgq_core::{build_sql_with_offset, split_query, Filter, NoopMetrics, SqlValue};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::sql::SqlOutputJson;

use super::{join_query, print_json};

pub fn run(query: &[String], offset: usize, format: OutputFormat) -> Result<()> {
    let output = build_output(&join_query(query), offset);
    match format {
        OutputFormat::Text => print!("{}", format_text(&output)),
        OutputFormat::Json => print_json(&output)?,
    }
    Ok(())
}

pub(crate) fn build_output(query: &str, offset: usize) -> SqlOutputJson {
    let result = split_query(query, &NoopMetrics);
    let compiled: Vec<_> = result.filters.iter().map(Filter::compile).collect();
    let clause = build_sql_with_offset(&compiled, offset);

    SqlOutputJson {
        terms: result.terms,
        sql: clause.sql,
        binds: clause.binds,
        offset,
    }
}

/// Renders the clause followed by one comment line per bind.
pub(crate) fn format_text(output: &SqlOutputJson) -> String {
    let mut out = String::new();

    if !output.terms.is_empty() {
        out.push_str(&format!("-- terms: {}\n", output.terms.join(" ")));
    }
    if output.sql.is_empty() {
        out.push_str("-- no filters\n");
        return out;
    }

    out.push_str(&format!("WHERE {}\n", output.sql));
    for (i, bind) in output.binds.iter().enumerate() {
        out.push_str(&format!("-- ${} = {}\n", output.offset + i + 1, format_bind(bind)));
    }
    out
}

fn format_bind(value: &SqlValue) -> String {
    match value {
        SqlValue::Text(s) => quote(s),
        SqlValue::Integer(n) => n.to_string(),
        SqlValue::Date(date) => quote(&date.format("%Y-%m-%d").to_string()),
        SqlValue::TextArray(items) => {
            let items: Vec<String> = items.iter().map(|s| quote(s)).collect();
            format!("ARRAY[{}]", items.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
#[path = "sql_tests.rs"]
mod tests;
