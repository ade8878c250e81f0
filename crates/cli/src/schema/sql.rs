// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pkgq_core::SqlValue;
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output for `pkgq sql -o json`.
#[derive(JsonSchema, Serialize)]
pub struct SqlOutputJson {
    /// Plain search terms, in query order.
    pub terms: Vec<String>,
    /// WHERE clause body without the `WHERE` keyword; empty without filters.
    pub sql: String,
    /// Values for `$offset+1`, `$offset+2`, ... in order.
    pub binds: Vec<SqlValue>,
    /// Placeholders reserved for the surrounding query.
    pub offset: usize,
}
