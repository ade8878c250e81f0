// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pkgq_core::LicenseKind;
use yare::parameterized;

#[test]
fn explains_filter() {
    let placeholders: Vec<String> = (1..=LicenseKind::CompatibleWithAppStore.licenses().count())
        .map(|i| format!("${i}"))
        .collect();
    assert_eq!(
        explain("license:compatible"),
        format!(
            "filter: license is compatible with the App Store\nsql: license IN ({})",
            placeholders.join(", ")
        )
    );
}

#[test]
fn explains_date_filter() {
    assert_eq!(
        explain("last_activity:>=2024-03-05"),
        "filter: last_activity is on or after 5 Mar 2024\nsql: last_activity_at >= $1"
    );
}

#[parameterized(
    plain = { "swift", "search text: not a filter: expected key:value" },
    unknown_key = { "lang:swift", "search text: unknown filter key 'lang'" },
    missing_value = { "stars:<", "search text: missing value for stars" },
    unsupported = { "type:!library", "search text: unsupported operator 'isNot' for type" },
    invalid = { "stars:lots", "search text: invalid value 'lots' for stars" },
)]
fn explains_rejection(term: &str, prefix: &str) {
    let message = explain(term);
    assert!(message.starts_with(prefix), "{message}");
}
