// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `stars:<op><count>` compares the star count.

use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Predicate, Scalar};

use super::{invalid_value, require_operator, SearchFilter, COMPARISON};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarsFilter {
    count: i64,
    predicate: Predicate,
}

impl StarsFilter {
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl SearchFilter for StarsFilter {
    const KEY: Key = Key::Stars;
    const OPERATORS: &'static [ExpressionOperator] = COMPARISON;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;
        let count: i64 = expression
            .value
            .parse()
            .map_err(|_| invalid_value::<Self>(expression, "an integer"))?;

        Ok(StarsFilter {
            count,
            predicate: Predicate {
                operator: expression.operator.default_predicate_operator(),
                bind: BindValue::Scalar(Scalar::Integer(count)),
                display: group_thousands(count),
            },
        })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

/// Formats a number with `,` between groups of three digits.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[path = "stars_tests.rs"]
mod tests;
