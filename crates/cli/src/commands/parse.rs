// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pkgq_core::{split_query, FilterUsage};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::parse::ParseOutputJson;
use crate::schema::{FilterJson, KeyCountJson};

use super::{join_query, print_json};

pub fn run(query: &[String], stats: bool, format: OutputFormat) -> Result<()> {
    let output = build_output(&join_query(query), stats);
    match format {
        OutputFormat::Text => print!("{}", format_text(&output)),
        OutputFormat::Json => print_json(&output)?,
    }
    Ok(())
}

pub(crate) fn build_output(query: &str, stats: bool) -> ParseOutputJson {
    let usage = FilterUsage::new();
    let result = split_query(query, &usage);

    ParseOutputJson {
        terms: result.terms,
        filters: result.filters.iter().map(FilterJson::from).collect(),
        stats: stats.then(|| {
            usage
                .snapshot()
                .into_iter()
                .map(|(key, count)| KeyCountJson { key, count })
                .collect()
        }),
    }
}

pub(crate) fn format_text(output: &ParseOutputJson) -> String {
    let mut out = String::new();

    if output.terms.is_empty() {
        out.push_str("terms: (none)\n");
    } else {
        out.push_str(&format!("terms: {}\n", output.terms.join(" ")));
    }

    if output.filters.is_empty() {
        out.push_str("filters: (none)\n");
    } else {
        out.push_str("filters:\n");
        for filter in &output.filters {
            out.push_str(&format!("  {}\n", filter.label));
        }
    }

    if let Some(stats) = &output.stats {
        out.push_str("stats:\n");
        for KeyCountJson { key, count } in stats {
            out.push_str(&format!("  {:<14} {}\n", key.as_str(), count));
        }
    }

    out
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
