// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the date filters.

use chrono::NaiveDate;

use crate::error::Result;
use crate::expression::Expression;
use crate::predicate::{BindValue, Predicate, PredicateOperator, Scalar};

use super::{invalid_value, require_operator, SearchFilter};

const EXPECTED_DATE: &str = "a date in YYYY-MM-DD format";

/// Parses a strict `YYYY-MM-DD` date. Dates are calendar days in UTC.
pub(super) fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Formats a date for display, e.g. `1 Jul 2020`.
pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub(super) fn date_phrase(operator: PredicateOperator) -> &'static str {
    match operator {
        PredicateOperator::GreaterThan => "is after",
        PredicateOperator::GreaterThanOrEqual => "is on or after",
        PredicateOperator::LessThan => "is before",
        PredicateOperator::LessThanOrEqual => "is on or before",
        other => other.phrase(),
    }
}

/// Validates a date expression for filter `F`.
pub(super) fn date_predicate<F: SearchFilter>(
    expression: &Expression,
) -> Result<(NaiveDate, Predicate)> {
    require_operator::<F>(expression)?;
    let date = parse_date(&expression.value)
        .ok_or_else(|| invalid_value::<F>(expression, EXPECTED_DATE))?;
    let predicate = Predicate {
        operator: expression.operator.default_predicate_operator(),
        bind: BindValue::Scalar(Scalar::Date(date)),
        display: format_date(date),
    };
    Ok((date, predicate))
}
