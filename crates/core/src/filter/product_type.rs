// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `type:<product type>` matches packages vending a product of that type.

use crate::catalog::ProductType;
use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{BindValue, Predicate, PredicateOperator};

use super::{invalid_value, require_operator, SearchFilter, IS_ONLY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTypeFilter {
    product_type: ProductType,
    predicate: Predicate,
}

impl ProductTypeFilter {
    pub fn product_type(&self) -> ProductType {
        self.product_type
    }
}

impl SearchFilter for ProductTypeFilter {
    const KEY: Key = Key::ProductType;
    const OPERATORS: &'static [ExpressionOperator] = IS_ONLY;

    fn new(expression: &Expression) -> Result<Self> {
        require_operator::<Self>(expression)?;
        let product_type = ProductType::from_name(&expression.value).ok_or_else(|| {
            invalid_value::<Self>(expression, "one of: executable, library, plugin")
        })?;

        Ok(ProductTypeFilter {
            product_type,
            predicate: Predicate {
                operator: PredicateOperator::JsonKeyExists,
                bind: BindValue::text(product_type.as_str()),
                display: product_type.label().to_string(),
            },
        })
    }

    fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
