// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for filter construction.
//!
//! These errors never leave [`split`](crate::split): a term whose filter
//! cannot be built is treated as plain search text. They are public so that
//! individual filters can be built and inspected directly, and so that
//! [`Rejection`] can explain why a term stayed search text.

use thiserror::Error;

use crate::expression::ExpressionOperator;
use crate::key::Key;

/// Reasons a filter cannot be built from an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unsupported operator '{operator}' for {key}")]
    UnsupportedOperator {
        key: Key,
        operator: ExpressionOperator,
    },

    #[error("invalid value '{value}' for {key}\n  hint: expected {expected}")]
    InvalidValue {
        key: Key,
        value: String,
        expected: &'static str,
    },
}

impl FilterError {
    /// The key whose filter failed to build.
    pub fn key(&self) -> Key {
        match self {
            FilterError::UnsupportedOperator { key, .. } | FilterError::InvalidValue { key, .. } => {
                *key
            }
        }
    }
}

/// Why a search term was not turned into a filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not a filter: expected key:value")]
    NotAFilter,

    #[error("unknown filter key '{0}'\n  hint: valid keys are: {keys}", keys = Key::names().join(", "))]
    UnknownKey(String),

    #[error("missing value for {0}")]
    MissingValue(Key),

    #[error(transparent)]
    Invalid(#[from] FilterError),
}

/// A specialized Result type for filter construction.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
