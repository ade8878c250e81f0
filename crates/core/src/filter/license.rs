// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `license:<name|kind>` matches a single license (`license:mit`) or every
//! license of a kind (`license:compatible`).

use crate::catalog::{License, LicenseKind};
use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Predicate, PredicateOperator};

use super::{invalid_value, require_operator, SearchFilter, EQUALITY};

/// What a license filter selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSelection {
    Kind(LicenseKind),
    License(&'static License),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFilter {
    selection: LicenseSelection,
    predicate: Predicate,
}

impl LicenseFilter {
    pub fn selection(&self) -> LicenseSelection {
        self.selection
    }
}

impl SearchFilter for LicenseFilter {
    const KEY: Key = Key::License;
    const OPERATORS: &'static [ExpressionOperator] = EQUALITY;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;

        // Kind arguments win, so `license:none` selects the kind.
        let selection = if let Some(kind) = LicenseKind::from_argument(&expression.value) {
            LicenseSelection::Kind(kind)
        } else if let Some(license) = License::from_name(&expression.value) {
            LicenseSelection::License(license)
        } else {
            return Err(invalid_value::<Self>(
                expression,
                "a license such as mit, or one of: compatible, incompatible, other, none",
            ));
        };

        let (ids, display): (Vec<&str>, &str) = match selection {
            LicenseSelection::Kind(kind) => (kind.licenses().map(|l| l.id).collect(), kind.label()),
            LicenseSelection::License(license) => (vec![license.id], license.name),
        };
        let operator = match expression.operator {
            ExpressionOperator::IsNot => PredicateOperator::NotIn,
            _ => PredicateOperator::In,
        };

        Ok(LicenseFilter {
            selection,
            predicate: Predicate {
                operator,
                bind: BindValue::text_array(ids),
                display: display.to_string(),
            },
        })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
