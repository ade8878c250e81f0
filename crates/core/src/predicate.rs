// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine-neutral predicates.
//!
//! A [`Predicate`] is what a filter validates down to: a comparison operator,
//! a value to bind as a query parameter, and a string to show to users.
//! [`CompiledFilter`] pairs the predicate with the key's fixed identifier as
//! a `left operator right` triple that a query builder can render for its own
//! dialect (see [`crate::sql`] for PostgreSQL).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::key::Key;

/// Comparison applied by a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum PredicateOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Left side is one of the right side's values.
    In,
    /// Left side is none of the right side's values.
    NotIn,
    /// Left side array contains every right side value.
    Contains,
    CaseInsensitiveMatch,
    NegativeCaseInsensitiveMatch,
    /// Left side JSON object has the right side as a key.
    JsonKeyExists,
}

impl PredicateOperator {
    /// Returns the operator name used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateOperator::Equal => "equal",
            PredicateOperator::NotEqual => "notEqual",
            PredicateOperator::LessThan => "lessThan",
            PredicateOperator::LessThanOrEqual => "lessThanOrEqual",
            PredicateOperator::GreaterThan => "greaterThan",
            PredicateOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            PredicateOperator::In => "in",
            PredicateOperator::NotIn => "notIn",
            PredicateOperator::Contains => "contains",
            PredicateOperator::CaseInsensitiveMatch => "caseInsensitiveMatch",
            PredicateOperator::NegativeCaseInsensitiveMatch => "negativeCaseInsensitiveMatch",
            PredicateOperator::JsonKeyExists => "jsonKeyExists",
        }
    }

    /// Phrase shown between key and value on a filter chip.
    pub fn phrase(&self) -> &'static str {
        match self {
            PredicateOperator::Equal
            | PredicateOperator::In
            | PredicateOperator::CaseInsensitiveMatch
            | PredicateOperator::JsonKeyExists => "is",
            PredicateOperator::NotEqual
            | PredicateOperator::NotIn
            | PredicateOperator::NegativeCaseInsensitiveMatch => "is not",
            PredicateOperator::LessThan => "is less than",
            PredicateOperator::LessThanOrEqual => "is less than or equal to",
            PredicateOperator::GreaterThan => "is greater than",
            PredicateOperator::GreaterThanOrEqual => "is greater than or equal to",
            PredicateOperator::Contains => "contains",
        }
    }
}

impl fmt::Display for PredicateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single bindable value, tagged so dates and date-shaped text stay apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Value bound as a query parameter, never interpolated into query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BindValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
    None,
}

impl BindValue {
    pub fn text(value: impl Into<String>) -> Self {
        BindValue::Scalar(Scalar::Text(value.into()))
    }

    pub fn text_array<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BindValue::Array(values.into_iter().map(|v| Scalar::Text(v.into())).collect())
    }
}

/// A validated filter, ready to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Predicate {
    pub operator: PredicateOperator,
    pub bind: BindValue,
    pub display: String,
}

/// One side of a compiled filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    /// A fixed column name owned by a [`Key`].
    Identifier(&'static str),
    /// A bound parameter.
    Parameter(BindValue),
    /// Any element of the array column with the given name.
    AnyOf(&'static str),
}

/// What a UI shows for an active filter, e.g. `stars is greater than 1,000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FilterChip {
    pub key: Key,
    pub operator: String,
    pub value: String,
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.operator, self.value)
    }
}

/// A filter compiled to a `left operator right` triple plus its chip.
///
/// Exactly one side carries the key's identifier; the other carries the bound
/// value. User input only ever appears inside [`Operand::Parameter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CompiledFilter {
    pub key: Key,
    pub left: Operand,
    pub operator: PredicateOperator,
    pub right: Operand,
    pub chip: FilterChip,
}

impl CompiledFilter {
    /// The key's identifier, whichever side it sits on.
    pub fn identifier(&self) -> &'static str {
        self.key.identifier()
    }

    /// The bound value, whichever side it sits on.
    pub fn bind(&self) -> Option<&BindValue> {
        match (&self.left, &self.right) {
            (Operand::Parameter(value), _) | (_, Operand::Parameter(value)) => Some(value),
            _ => None,
        }
    }

    /// Human-readable label, e.g. `license is compatible with the App Store`.
    pub fn display_label(&self) -> String {
        self.chip.to_string()
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
