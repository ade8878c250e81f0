// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `platform:<name>[,<name>...]` matches packages compatible with every
//! listed platform. Unknown names are dropped.

use std::collections::BTreeSet;

use crate::catalog::Platform;
use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Predicate, PredicateOperator};

use super::{invalid_value, require_operator, SearchFilter, IS_ONLY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformFilter {
    platforms: BTreeSet<Platform>,
    predicate: Predicate,
}

impl PlatformFilter {
    /// Recognized platforms, ordered by identifier.
    pub fn platforms(&self) -> &BTreeSet<Platform> {
        &self.platforms
    }
}

impl SearchFilter for PlatformFilter {
    const KEY: Key = Key::Platform;
    const OPERATORS: &'static [ExpressionOperator] = IS_ONLY;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;

        let platforms: BTreeSet<Platform> = expression
            .value
            .split(',')
            .filter_map(Platform::from_name)
            .collect();
        if platforms.is_empty() {
            return Err(invalid_value::<Self>(
                expression,
                "one or more of: ios, linux, macos, tvos, visionos, watchos",
            ));
        }

        let display = platforms
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(PlatformFilter {
            predicate: Predicate {
                operator: PredicateOperator::Contains,
                bind: BindValue::text_array(platforms.iter().map(|p| p.as_str())),
                display,
            },
            platforms,
        })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    fn operator_phrase(&self) -> &'static str {
        "is compatible with"
    }
}
