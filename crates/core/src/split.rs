// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting search terms into plain text and filters.
//!
//! A term becomes a filter only if every step succeeds: it has the shape
//! `key:value`, the key is registered, the value parses as an expression,
//! and the key's filter accepts the expression. Any failure leaves the term
//! as ordinary search text, unchanged. Nothing in this module returns an
//! error.

use tracing::{debug, trace};

use crate::error::Rejection;
use crate::expression::Expression;
use crate::filter::Filter;
use crate::metrics::FilterMetrics;
use crate::registry;

/// Search terms and filters found in a query, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    pub terms: Vec<String>,
    pub filters: Vec<Filter>,
}

/// Partitions raw terms into search terms and filters.
///
/// Each built filter is reported to `metrics` under its key.
pub fn split<S: AsRef<str>>(terms: &[S], metrics: &dyn FilterMetrics) -> SplitResult {
    let mut result = SplitResult::default();

    for term in terms {
        let term = term.as_ref();
        match try_parse_filter(term) {
            Ok(filter) => {
                trace!(term, key = %filter.key(), "filter accepted");
                metrics.increment(filter.key());
                result.filters.push(filter);
            }
            Err(rejection) => {
                if rejection != Rejection::NotAFilter {
                    debug!(term, reason = %rejection, "treating term as search text");
                }
                result.terms.push(term.to_string());
            }
        }
    }

    result
}

/// Splits a query on whitespace, then calls [`split`].
pub fn split_query(query: &str, metrics: &dyn FilterMetrics) -> SplitResult {
    let terms: Vec<&str> = query.split_whitespace().collect();
    split(terms.as_slice(), metrics)
}

/// Builds the filter a single term describes, if any.
pub fn parse_filter(term: &str) -> Option<Filter> {
    try_parse_filter(term).ok()
}

/// Builds the filter a single term describes, or says why it is not one.
pub fn try_parse_filter(term: &str) -> Result<Filter, Rejection> {
    let parts: Vec<&str> = term
        .split(':')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let [name, value] = parts.as_slice() else {
        return Err(Rejection::NotAFilter);
    };

    let registration =
        registry::lookup(name).ok_or_else(|| Rejection::UnknownKey(name.to_string()))?;
    let expression =
        Expression::parse(value).ok_or(Rejection::MissingValue(registration.key))?;

    Ok((registration.build)(&expression)?)
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
