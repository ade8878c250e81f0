// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PostgreSQL rendering for compiled filters.
//!
//! Produces a `WHERE` clause body with numbered placeholders (`$1`, `$2`, ...)
//! and the values to bind to them. Column names come only from [`Key`]
//! identifiers and every user-supplied value is a bind, so the SQL text never
//! contains user input. Values matched with `ILIKE` have their wildcards
//! escaped, so `author:%` matches an owner named `%`, not every owner.
//!
//! [`Key`]: crate::key::Key

use chrono::NaiveDate;
use serde::Serialize;

use crate::predicate::{BindValue, CompiledFilter, Operand, PredicateOperator, Scalar};

/// A value bound to a numbered placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    TextArray(Vec<String>),
}

impl From<&Scalar> for SqlValue {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Integer(n) => SqlValue::Integer(*n),
            Scalar::Date(date) => SqlValue::Date(*date),
            Scalar::Text(s) => SqlValue::Text(s.clone()),
        }
    }
}

/// AND-joined conditions and their binds, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WhereClause {
    pub sql: String,
    pub binds: Vec<SqlValue>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// SQL token for a predicate operator.
pub fn operator_token(operator: PredicateOperator) -> &'static str {
    match operator {
        PredicateOperator::Equal => "=",
        PredicateOperator::NotEqual => "!=",
        PredicateOperator::LessThan => "<",
        PredicateOperator::LessThanOrEqual => "<=",
        PredicateOperator::GreaterThan => ">",
        PredicateOperator::GreaterThanOrEqual => ">=",
        PredicateOperator::In => "IN",
        PredicateOperator::NotIn => "NOT IN",
        PredicateOperator::Contains => "@>",
        PredicateOperator::CaseInsensitiveMatch => "ILIKE",
        PredicateOperator::NegativeCaseInsensitiveMatch => "NOT ILIKE",
        PredicateOperator::JsonKeyExists => "?",
    }
}

/// Builds a WHERE clause with placeholders starting at `$1`.
pub fn build_sql(filters: &[CompiledFilter]) -> WhereClause {
    build_sql_with_offset(filters, 0)
}

/// Builds a WHERE clause whose first placeholder is `$(start_offset + 1)`.
///
/// Use the offset when the clause is appended to a query that already binds
/// parameters.
pub fn build_sql_with_offset(filters: &[CompiledFilter], start_offset: usize) -> WhereClause {
    let mut placeholders = Placeholders {
        index: start_offset,
        binds: Vec::new(),
    };
    let sql = filters
        .iter()
        .map(|filter| build_filter_sql(filter, &mut placeholders))
        .collect::<Vec<_>>()
        .join(" AND ");

    WhereClause {
        sql,
        binds: placeholders.binds,
    }
}

struct Placeholders {
    index: usize,
    binds: Vec<SqlValue>,
}

impl Placeholders {
    fn bind(&mut self, value: SqlValue) -> String {
        self.index += 1;
        self.binds.push(value);
        format!("${}", self.index)
    }
}

fn build_filter_sql(filter: &CompiledFilter, placeholders: &mut Placeholders) -> String {
    let operator = filter.operator;

    match (&filter.left, &filter.right) {
        (Operand::Identifier(column), Operand::Parameter(BindValue::None)) => {
            null_clause(column, operator)
        }
        (Operand::Identifier(_), Operand::Parameter(BindValue::Array(items)))
            if items.is_empty()
                && matches!(operator, PredicateOperator::In | PredicateOperator::NotIn) =>
        {
            // `IN ()` is a syntax error.
            match operator {
                PredicateOperator::NotIn => "TRUE".to_string(),
                _ => "FALSE".to_string(),
            }
        }
        (left, right @ Operand::AnyOf(_))
            if operator == PredicateOperator::NegativeCaseInsensitiveMatch =>
        {
            // `NOT ILIKE ANY` would match rows with any non-matching element.
            let left = render_operand(left, operator, placeholders);
            let right = render_operand(right, operator, placeholders);
            format!(
                "NOT ({left} {} {right})",
                operator_token(PredicateOperator::CaseInsensitiveMatch)
            )
        }
        (left, right) => {
            let left = render_operand(left, operator, placeholders);
            let right = render_operand(right, operator, placeholders);
            format!("{left} {} {right}", operator_token(operator))
        }
    }
}

fn null_clause(column: &str, operator: PredicateOperator) -> String {
    match operator {
        PredicateOperator::NotEqual
        | PredicateOperator::NotIn
        | PredicateOperator::NegativeCaseInsensitiveMatch => format!("{column} IS NOT NULL"),
        _ => format!("{column} IS NULL"),
    }
}

fn render_operand(
    operand: &Operand,
    operator: PredicateOperator,
    placeholders: &mut Placeholders,
) -> String {
    match operand {
        Operand::Identifier(column) => (*column).to_string(),
        Operand::AnyOf(column) => format!("ANY({column})"),
        Operand::Parameter(BindValue::Scalar(Scalar::Text(text)))
            if is_pattern_match(operator) =>
        {
            placeholders.bind(SqlValue::Text(escape_like(text)))
        }
        Operand::Parameter(BindValue::Scalar(scalar)) => placeholders.bind(scalar.into()),
        Operand::Parameter(BindValue::Array(items)) => match operator {
            PredicateOperator::In | PredicateOperator::NotIn => {
                let list = items
                    .iter()
                    .map(|item| placeholders.bind(item.into()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({list})")
            }
            _ => placeholders.bind(SqlValue::TextArray(
                items.iter().map(ToString::to_string).collect(),
            )),
        },
        Operand::Parameter(BindValue::None) => "NULL".to_string(),
    }
}

fn is_pattern_match(operator: PredicateOperator) -> bool {
    matches!(
        operator,
        PredicateOperator::CaseInsensitiveMatch | PredicateOperator::NegativeCaseInsensitiveMatch
    )
}

/// Escapes `LIKE` wildcards so the pattern matches the value literally.
/// Backslash is PostgreSQL's default `LIKE` escape character.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "sql_tests.rs"]
mod tests;
