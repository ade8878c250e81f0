// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use schemars::JsonSchema;
use serde::Serialize;

use super::{FilterJson, KeyCountJson};

/// JSON output for `pkgq parse -o json`.
#[derive(JsonSchema, Serialize)]
pub struct ParseOutputJson {
    /// Plain search terms, in query order.
    pub terms: Vec<String>,
    /// Filters, in query order.
    pub filters: Vec<FilterJson>,
    /// Per-key filter counts, present with `--stats`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<KeyCountJson>>,
}
