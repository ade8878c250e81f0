// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use pkgq_core::Key;
use similar_asserts::assert_eq;

#[test]
fn text_output_lists_terms_and_labels() {
    let output = build_output("swift stars:>1000 platform:linux,ios", false);
    assert_eq!(
        format_text(&output).as_str(),
        "terms: swift\n\
         filters:\n  \
           stars is greater than 1,000\n  \
           platform is compatible with iOS, Linux\n"
    );
}

#[test]
fn text_output_marks_empty_sections() {
    let output = build_output("", false);
    assert_eq!(format_text(&output).as_str(), "terms: (none)\nfilters: (none)\n");
}

#[test]
fn stats_count_each_key() {
    let output = build_output("stars:>1 stars:<9 type:library stars:abc", true);
    let stats = output.stats.as_ref().unwrap();
    assert_eq!(stats.len(), Key::COUNT);

    let count = |key: Key| stats.iter().find(|s| s.key == key).unwrap().count;
    assert_eq!(count(Key::Stars), 2);
    assert_eq!(count(Key::ProductType), 1);
    assert_eq!(count(Key::Author), 0);

    assert!(format_text(&output).contains("  stars          2\n"));
}

#[test]
fn stats_omitted_without_flag() {
    let output = build_output("stars:>1", false);
    let json = serde_json::to_value(&output).unwrap();
    assert!(json.get("stats").is_none());
}

#[test]
fn json_output_flattens_compiled_filter() {
    let output = build_output("keyword:!ui", false);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "terms": [],
            "filters": [{
                "label": "keyword is not ui",
                "key": "keyword",
                "left": { "kind": "parameter", "value": { "scalar": { "type": "text", "value": "ui" } } },
                "operator": "negativeCaseInsensitiveMatch",
                "right": { "kind": "any_of", "value": "keywords" },
                "chip": { "key": "keyword", "operator": "is not", "value": "ui" }
            }]
        })
    );
}
