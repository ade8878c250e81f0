// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `author:<owner>` matches the repository owner, ignoring case.

use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Predicate, PredicateOperator};

use super::{require_operator, SearchFilter, EQUALITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFilter {
    predicate: Predicate,
}

impl SearchFilter for AuthorFilter {
    const KEY: Key = Key::Author;
    const OPERATORS: &'static [ExpressionOperator] = EQUALITY;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;
        let operator = match expression.operator {
            ExpressionOperator::IsNot => PredicateOperator::NegativeCaseInsensitiveMatch,
            _ => PredicateOperator::CaseInsensitiveMatch,
        };
        Ok(AuthorFilter {
            predicate: Predicate {
                operator,
                bind: BindValue::text(&expression.value),
                display: expression.value.clone(),
            },
        })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
