// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `last_activity:<op><date>` compares the date of the latest commit, issue
//! or pull request activity.

use chrono::NaiveDate;

use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::Predicate;

use super::date::{date_phrase, date_predicate};
use super::{SearchFilter, COMPARISON};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastActivityFilter {
    date: NaiveDate,
    predicate: Predicate,
}

impl LastActivityFilter {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl SearchFilter for LastActivityFilter {
    const KEY: Key = Key::LastActivity;
    const OPERATORS: &'static [ExpressionOperator] = COMPARISON;

    fn new(expression: &Expression) -> Result<Self> {
        let (date, predicate) = date_predicate::<Self>(expression)?;
        Ok(LastActivityFilter { date, predicate })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    fn operator_phrase(&self) -> &'static str {
        date_phrase(self.predicate.operator)
    }
}
