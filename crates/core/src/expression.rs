// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the value half of a `key:value` search term.
//!
//! The value may start with a comparison prefix (`>=`, `>`, `<=`, `<`, `!`).
//! Whatever follows the prefix is the expression value:
//!
//! ```text
//! >500        greater than 500
//! <=2024-01-01 less than or equal to 2024-01-01
//! !mit        is not mit
//! library     is library
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::predicate::PredicateOperator;

/// Comparison requested by a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum ExpressionOperator {
    /// `>` prefix.
    GreaterThan,
    /// `>=` prefix.
    GreaterThanOrEqual,
    /// No prefix.
    Is,
    /// `!` prefix.
    IsNot,
    /// `<` prefix.
    LessThan,
    /// `<=` prefix.
    LessThanOrEqual,
}

/// Prefixes in match order. Two-character prefixes come first so that `>=`
/// is not read as `>` followed by a value starting with `=`.
const PREFIXES: [(&str, ExpressionOperator); 5] = [
    (">=", ExpressionOperator::GreaterThanOrEqual),
    (">", ExpressionOperator::GreaterThan),
    ("<=", ExpressionOperator::LessThanOrEqual),
    ("<", ExpressionOperator::LessThan),
    ("!", ExpressionOperator::IsNot),
];

impl ExpressionOperator {
    /// All operators.
    pub const ALL: [ExpressionOperator; 6] = [
        ExpressionOperator::Is,
        ExpressionOperator::IsNot,
        ExpressionOperator::GreaterThan,
        ExpressionOperator::GreaterThanOrEqual,
        ExpressionOperator::LessThan,
        ExpressionOperator::LessThanOrEqual,
    ];

    /// Returns the operator name used in messages and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionOperator::GreaterThan => "greaterThan",
            ExpressionOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            ExpressionOperator::Is => "is",
            ExpressionOperator::IsNot => "isNot",
            ExpressionOperator::LessThan => "lessThan",
            ExpressionOperator::LessThanOrEqual => "lessThanOrEqual",
        }
    }

    /// Returns the prefix users type in front of the value.
    pub fn prefix(&self) -> &'static str {
        match self {
            ExpressionOperator::GreaterThan => ">",
            ExpressionOperator::GreaterThanOrEqual => ">=",
            ExpressionOperator::Is => "",
            ExpressionOperator::IsNot => "!",
            ExpressionOperator::LessThan => "<",
            ExpressionOperator::LessThanOrEqual => "<=",
        }
    }

    /// Number of characters the prefix consumes from the raw value.
    pub fn prefix_len(&self) -> usize {
        self.prefix().len()
    }

    /// Predicate operator used by filters that keep plain comparison
    /// semantics.
    pub fn default_predicate_operator(&self) -> PredicateOperator {
        match self {
            ExpressionOperator::GreaterThan => PredicateOperator::GreaterThan,
            ExpressionOperator::GreaterThanOrEqual => PredicateOperator::GreaterThanOrEqual,
            ExpressionOperator::Is => PredicateOperator::Equal,
            ExpressionOperator::IsNot => PredicateOperator::NotEqual,
            ExpressionOperator::LessThan => PredicateOperator::LessThan,
            ExpressionOperator::LessThanOrEqual => PredicateOperator::LessThanOrEqual,
        }
    }
}

impl fmt::Display for ExpressionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A comparison operator together with the value it applies to.
///
/// `value` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Expression {
    pub operator: ExpressionOperator,
    pub value: String,
}

impl Expression {
    /// Parse the part of a search term after its first `:`.
    ///
    /// Returns `None` when nothing is left once the prefix is consumed, so
    /// `""`, `"!"` and `">="` do not produce an expression.
    pub fn parse(input: &str) -> Option<Expression> {
        let (operator, value) = PREFIXES
            .iter()
            .find_map(|&(prefix, operator)| input.strip_prefix(prefix).map(|rest| (operator, rest)))
            .unwrap_or((ExpressionOperator::Is, input));

        if value.is_empty() {
            return None;
        }

        Some(Expression {
            operator,
            value: value.to_string(),
        })
    }
}

/// Parse the value half of a search term. See [`Expression::parse`].
pub fn parse_expression(input: &str) -> Option<Expression> {
    Expression::parse(input)
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
