// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use super::*;
use crate::catalog::{LicenseKind, Platform};
use crate::error::Rejection;
use crate::expression::ExpressionOperator;
use crate::filter::{LicenseSelection, SearchFilter, StarsFilter};
use crate::key::Key;
use crate::metrics::{FilterUsage, NoopMetrics};
use crate::predicate::{BindValue, PredicateOperator, Scalar};
use yare::parameterized;

fn split_noop(terms: &[&str]) -> SplitResult {
    split(terms, &NoopMetrics)
}

#[parameterized(
    plain_word = { "test" },
    no_value = { "stars:" },
    no_key = { ":500" },
    only_colon = { ":" },
    two_colons = { "stars:>500:extra" },
    unknown_key = { "foo:bar" },
    uppercase_key = { "Stars:>500" },
    bare_operator = { "stars:>" },
    bare_bang = { "author:!" },
    stars_not_integer = { "stars:abc" },
    platform_is_not = { "platform:!ios" },
    platform_unknown = { "platform:android" },
    type_unknown = { "type:macro" },
    license_unknown = { "license:bogus" },
    bad_date = { "last_commit:>2020-13-01" },
    url = { "https://example.com" },
)]
fn term_stays_search_text(term: &str) {
    let result = split_noop(&[term]);
    assert_eq!(result.terms, vec![term.to_string()]);
    assert!(result.filters.is_empty());
}

#[test]
fn splits_terms_and_filters() {
    let result = split_noop(&["test", "stars:>500"]);
    assert_eq!(result.terms, vec!["test".to_string()]);
    assert_eq!(result.filters.len(), 1);

    let Filter::Stars(stars) = &result.filters[0] else {
        panic!("expected stars filter, got {:?}", result.filters[0]);
    };
    assert_eq!(stars.count(), 500);
    assert_eq!(stars.predicate().operator, PredicateOperator::GreaterThan);
    assert_eq!(stars.predicate().bind, BindValue::Scalar(Scalar::Integer(500)));
}

#[test]
fn whitespace_around_components_is_trimmed() {
    let result = split_noop(&[" stars : >500 "]);
    assert!(result.terms.is_empty());
    assert_eq!(result.filters[0].key(), Key::Stars);
}

#[test]
fn platform_drops_unknown_names() {
    let result = split_noop(&["platform:ios,bogus,macos"]);
    assert!(result.terms.is_empty());

    let Filter::Platform(platform) = &result.filters[0] else {
        panic!("expected platform filter");
    };
    let platforms: Vec<Platform> = platform.platforms().iter().copied().collect();
    assert_eq!(platforms, vec![Platform::IOS, Platform::MacOS]);
    assert_eq!(
        platform.predicate().bind,
        BindValue::text_array(["ios", "macos"])
    );
}

#[test]
fn license_kind_expands_to_every_license_of_that_kind() {
    let result = split_noop(&["license:compatible"]);

    let Filter::License(license) = &result.filters[0] else {
        panic!("expected license filter");
    };
    assert_eq!(
        license.selection(),
        LicenseSelection::Kind(LicenseKind::CompatibleWithAppStore)
    );
    assert_eq!(license.predicate().operator, PredicateOperator::In);
    let expected =
        BindValue::text_array(LicenseKind::CompatibleWithAppStore.licenses().map(|l| l.id));
    assert_eq!(license.predicate().bind, expected);
}

#[test]
fn preserves_order_of_terms_and_filters() {
    let result = split_noop(&[
        "swift",
        "type:library",
        "server",
        "stars:>=10",
        "author:apple",
        "http",
    ]);
    assert_eq!(result.terms, vec!["swift", "server", "http"]);
    let keys: Vec<Key> = result.filters.iter().map(Filter::key).collect();
    assert_eq!(keys, vec![Key::ProductType, Key::Stars, Key::Author]);
}

#[test]
fn same_key_may_appear_twice() {
    let result = split_noop(&["stars:>10", "stars:<100"]);
    assert_eq!(result.filters.len(), 2);
}

#[test]
fn resplitting_terms_finds_no_filters() {
    let input = [
        "test",
        "stars:>500",
        "stars:abc",
        "platform:!ios",
        "foo:bar",
        "license:mit",
        "a:b:c",
    ];
    let first = split_noop(&input);
    let second = split(first.terms.as_slice(), &NoopMetrics);
    assert!(second.filters.is_empty());
    assert_eq!(second.terms, first.terms);
}

#[test]
fn split_query_splits_on_whitespace() {
    let result = split_query("  swift\tstars:>500\n type:plugin ", &NoopMetrics);
    assert_eq!(result.terms, vec!["swift"]);
    assert_eq!(result.filters.len(), 2);
}

#[test]
fn empty_input() {
    assert_eq!(split_noop(&[]), SplitResult::default());
    assert_eq!(split_query("", &NoopMetrics), SplitResult::default());
}

#[test]
fn metrics_count_only_built_filters() {
    let usage = FilterUsage::new();
    split(
        &["stars:>5", "stars:abc", "platform:!ios", "type:library", "test"],
        &usage,
    );
    assert_eq!(usage.count(Key::Stars), 1);
    assert_eq!(usage.count(Key::ProductType), 1);
    assert_eq!(usage.count(Key::Platform), 0);
    assert_eq!(usage.total(), 2);
}

#[test]
fn parse_filter_matches_direct_construction() {
    let filter = parse_filter("stars:<=42").unwrap();
    let expected = StarsFilter::new(&Expression {
        operator: ExpressionOperator::LessThanOrEqual,
        value: "42".to_string(),
    })
    .unwrap();
    assert_eq!(filter, Filter::Stars(expected));
}

#[parameterized(
    no_colon = { "test", Rejection::NotAFilter },
    three_parts = { "a:b:c", Rejection::NotAFilter },
    unknown_key = { "foo:bar", Rejection::UnknownKey("foo".to_string()) },
    bare_operator = { "stars:>=", Rejection::MissingValue(Key::Stars) },
)]
fn rejection_reason(term: &str, expected: Rejection) {
    assert_eq!(try_parse_filter(term).unwrap_err(), expected);
}

#[test]
fn rejection_carries_filter_error() {
    let rejection = try_parse_filter("platform:!ios").unwrap_err();
    let Rejection::Invalid(err) = rejection else {
        panic!("expected filter error, got {rejection:?}");
    };
    assert_eq!(err.key(), Key::Platform);
    assert!(matches!(err, crate::error::FilterError::UnsupportedOperator { .. }));
}
