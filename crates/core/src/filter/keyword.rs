// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `keyword:<word>` matches packages with a keyword equal to the value,
//! ignoring case.

use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Operand, Predicate, PredicateOperator};

use super::{require_operator, SearchFilter, EQUALITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    predicate: Predicate,
}

impl SearchFilter for KeywordFilter {
    const KEY: Key = Key::Keyword;
    const OPERATORS: &'static [ExpressionOperator] = EQUALITY;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;
        let operator = match expression.operator {
            ExpressionOperator::IsNot => PredicateOperator::NegativeCaseInsensitiveMatch,
            _ => PredicateOperator::CaseInsensitiveMatch,
        };
        Ok(KeywordFilter {
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

    // The keywords column is an array, so the value is matched against any
    // of its elements: `value ILIKE ANY(keywords)`.
    fn left_hand_side(&self) -> Operand {
        Operand::Parameter(self.predicate.bind.clone())
    }

    fn right_hand_side(&self) -> Operand {
        Operand::AnyOf(Self::KEY.identifier())
    }
}
