// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;
use yare::parameterized;

#[parameterized(
    author = { "author", Key::Author },
    keyword = { "keyword", Key::Keyword },
    last_activity = { "last_activity", Key::LastActivity },
    last_commit = { "last_commit", Key::LastCommit },
    license = { "license", Key::License },
    platform = { "platform", Key::Platform },
    stars = { "stars", Key::Stars },
    product_type = { "type", Key::ProductType },
)]
fn from_name_round_trips(name: &str, expected: Key) {
    assert_eq!(Key::from_name(name), Some(expected));
    assert_eq!(expected.as_str(), name);
    assert_eq!(expected.to_string(), name);
}

#[parameterized(
    uppercase = { "Stars" },
    camel_case = { "lastCommit" },
    padded = { " stars" },
    product_type_spelled_out = { "product_type" },
    empty = { "" },
)]
fn from_name_is_exact(name: &str) {
    assert_eq!(Key::from_name(name), None);
}

#[test]
fn index_matches_position_in_all() {
    for (position, key) in Key::ALL.iter().enumerate() {
        assert_eq!(key.index(), position);
    }
}

#[test]
fn identifiers_are_distinct_plain_sql_names() {
    let identifiers: HashSet<_> = Key::ALL.iter().map(|k| k.identifier()).collect();
    assert_eq!(identifiers.len(), Key::COUNT);
    for identifier in identifiers {
        assert!(identifier
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_'));
    }
}

#[test]
fn examples_start_with_their_key() {
    for key in Key::ALL {
        assert!(key.example().starts_with(&format!("{}:", key.as_str())));
    }
}

#[test]
fn serializes_as_canonical_name() {
    assert_eq!(
        serde_json::to_string(&Key::ProductType).unwrap(),
        "\"type\""
    );
    assert_eq!(
        serde_json::to_string(&Key::LastActivity).unwrap(),
        "\"last_activity\""
    );
}
