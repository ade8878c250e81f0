// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! Filters and bind values are emitted using the core types directly, so
//! these wrappers only add what the commands report around them.

use pkgq_core::{CompiledFilter, Filter, Key};
use schemars::JsonSchema;
use serde::Serialize;

pub mod parse;
pub mod sql;

/// JSON representation of one compiled filter.
#[derive(JsonSchema, Serialize)]
pub struct FilterJson {
    /// Human-readable label, e.g. "stars is greater than 500".
    pub label: String,
    #[serde(flatten)]
    pub compiled: CompiledFilter,
}

impl From<&Filter> for FilterJson {
    fn from(filter: &Filter) -> Self {
        let compiled = filter.compile();
        FilterJson {
            label: compiled.display_label(),
            compiled,
        }
    }
}

/// Number of filters built for one key.
#[derive(JsonSchema, Serialize)]
pub struct KeyCountJson {
    pub key: Key,
    pub count: u64,
}
