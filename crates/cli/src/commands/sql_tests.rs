// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn text_output_lists_binds() {
    let output = build_output("http stars:>500 platform:macos,ios last_commit:<2024-01-31", 0);
    similar_asserts::assert_eq!(
        format_text(&output).as_str(),
        "-- terms: http\n\
         WHERE stars > $1 AND platform_compatibility @> $2 AND last_commit_date < $3\n\
         -- $1 = 500\n\
         -- $2 = ARRAY['ios', 'macos']\n\
         -- $3 = '2024-01-31'\n"
    );
}

#[test]
fn offset_numbers_binds_after_reserved_placeholders() {
    let output = build_output("author:o'brien", 2);
    similar_asserts::assert_eq!(output.sql.as_str(), "repo_owner ILIKE $3");
    similar_asserts::assert_eq!(
        format_text(&output).as_str(),
        "WHERE repo_owner ILIKE $3\n-- $3 = 'o''brien'\n"
    );
}

#[test]
fn no_filters() {
    let output = build_output("just words", 0);
    assert!(output.binds.is_empty());
    similar_asserts::assert_eq!(
        format_text(&output).as_str(),
        "-- terms: just words\n-- no filters\n"
    );
}

#[parameterized(
    text = { SqlValue::Text("mit".into()), "'mit'" },
    integer = { SqlValue::Integer(-7), "-7" },
    empty_array = { SqlValue::TextArray(Vec::new()), "ARRAY[]" },
)]
fn bind_formatting(value: SqlValue, expected: &str) {
    assert_eq!(format_bind(&value).as_str(), expected);
}
