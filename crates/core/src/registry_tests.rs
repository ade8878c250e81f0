// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::expression::parse_expression;
use yare::parameterized;

#[test]
fn registry_follows_key_order() {
    let keys: Vec<Key> = REGISTRY.iter().map(|r| r.key).collect();
    assert_eq!(keys, Key::ALL.to_vec());
}

#[test]
fn every_key_is_registered_once() {
    for key in Key::ALL {
        assert_eq!(REGISTRY.iter().filter(|r| r.key == key).count(), 1);
        assert_eq!(registration(key).key, key);
    }
}

#[test]
fn registered_example_builds_its_own_filter() {
    for registration in &REGISTRY {
        let example = registration.key.example();
        let (_, value) = example.split_once(':').unwrap();
        let expression = parse_expression(value).unwrap();
        let filter = (registration.build)(&expression).unwrap();
        assert_eq!(filter.key(), registration.key);
    }
}

#[parameterized(
    author = { Key::Author, 2 },
    keyword = { Key::Keyword, 2 },
    last_activity = { Key::LastActivity, 6 },
    last_commit = { Key::LastCommit, 6 },
    license = { Key::License, 2 },
    platform = { Key::Platform, 1 },
    stars = { Key::Stars, 6 },
    product_type = { Key::ProductType, 1 },
)]
fn operator_counts(key: Key, count: usize) {
    assert_eq!(registration(key).operators.len(), count);
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(lookup("stars").is_some());
    assert!(lookup("STARS").is_none());
    assert!(lookup("unknown").is_none());
}
