// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search filters.
//!
//! Each filter type validates an [`Expression`] against its own operator and
//! value rules and produces a [`Predicate`]:
//!
//! | Key             | Operators        | Value                          |
//! |-----------------|------------------|--------------------------------|
//! | `author`        | `is`, `isNot`    | any text                       |
//! | `keyword`       | `is`, `isNot`    | any text                       |
//! | `last_activity` | all              | `YYYY-MM-DD`                   |
//! | `last_commit`   | all              | `YYYY-MM-DD`                   |
//! | `license`       | `is`, `isNot`    | license name or kind           |
//! | `platform`      | `is`             | comma-separated platform names |
//! | `type`          | `is`             | product type                   |
//! | `stars`         | all              | integer                        |

mod author;
mod date;
mod keyword;
mod last_activity;
mod last_commit;
mod license;
mod platform;
mod product_type;
mod stars;

pub use author::AuthorFilter;
pub use keyword::KeywordFilter;
pub use last_activity::LastActivityFilter;
pub use last_commit::LastCommitFilter;
pub use license::{LicenseFilter, LicenseSelection};
pub use platform::PlatformFilter;
pub use product_type::ProductTypeFilter;
pub use stars::StarsFilter;

use crate::error::{FilterError, Result};
use crate::expression::{Expression, ExpressionOperator};
use crate::key::Key;
use crate::predicate::{CompiledFilter, FilterChip, Operand, Predicate, PredicateOperator};

const IS_ONLY: &[ExpressionOperator] = &[ExpressionOperator::Is];
const EQUALITY: &[ExpressionOperator] = &[ExpressionOperator::Is, ExpressionOperator::IsNot];
const COMPARISON: &[ExpressionOperator] = &ExpressionOperator::ALL;

/// Behaviour shared by every filter type.
///
/// The SQL accessors default to `identifier operator parameter`; filters
/// whose column needs a different shape override them.
pub trait SearchFilter: Sized {
    /// Key this filter is registered under.
    const KEY: Key;

    /// Expression operators this filter accepts.
    const OPERATORS: &'static [ExpressionOperator];

    /// Builds the filter, validating operator and value.
    fn new(expression: &Expression) -> Result<Self>;

    fn predicate(&self) -> &Predicate;

    fn left_hand_side(&self) -> Operand {
        Operand::Identifier(Self::KEY.identifier())
    }

    fn operator(&self) -> PredicateOperator {
        self.predicate().operator
    }

    fn right_hand_side(&self) -> Operand {
        Operand::Parameter(self.predicate().bind.clone())
    }

    /// Phrase shown between key and value on the filter chip.
    fn operator_phrase(&self) -> &'static str {
        self.predicate().operator.phrase()
    }

    fn chip(&self) -> FilterChip {
        FilterChip {
            key: Self::KEY,
            operator: self.operator_phrase().to_string(),
            value: self.predicate().display.clone(),
        }
    }

    fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            key: Self::KEY,
            left: self.left_hand_side(),
            operator: self.operator(),
            right: self.right_hand_side(),
            chip: self.chip(),
        }
    }
}

/// Rejects expressions whose operator the filter does not accept.
fn require_operator<F: SearchFilter>(expression: &Expression) -> Result<()> {
    if F::OPERATORS.contains(&expression.operator) {
        Ok(())
    } else {
        Err(FilterError::UnsupportedOperator {
            key: F::KEY,
            operator: expression.operator,
        })
    }
}

fn invalid_value<F: SearchFilter>(expression: &Expression, expected: &'static str) -> FilterError {
    FilterError::InvalidValue {
        key: F::KEY,
        value: expression.value.clone(),
        expected,
    }
}

/// Any successfully built filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Author(AuthorFilter),
    Keyword(KeywordFilter),
    LastActivity(LastActivityFilter),
    LastCommit(LastCommitFilter),
    License(LicenseFilter),
    Platform(PlatformFilter),
    ProductType(ProductTypeFilter),
    Stars(StarsFilter),
}

macro_rules! each_filter {
    ($filter:expr, $inner:ident => $body:expr) => {
        match $filter {
            Filter::Author($inner) => $body,
            Filter::Keyword($inner) => $body,
            Filter::LastActivity($inner) => $body,
            Filter::LastCommit($inner) => $body,
            Filter::License($inner) => $body,
            Filter::Platform($inner) => $body,
            Filter::ProductType($inner) => $body,
            Filter::Stars($inner) => $body,
        }
    };
}

macro_rules! impl_from_filter {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Filter {
                fn from(filter: $ty) -> Self {
                    Filter::$variant(filter)
                }
            }
        )*
    };
}

impl_from_filter!(
    Author(AuthorFilter),
    Keyword(KeywordFilter),
    LastActivity(LastActivityFilter),
    LastCommit(LastCommitFilter),
    License(LicenseFilter),
    Platform(PlatformFilter),
    ProductType(ProductTypeFilter),
    Stars(StarsFilter),
);

impl Filter {
    /// Builds the filter registered for `key`.
    pub fn new(key: Key, expression: &Expression) -> Result<Filter> {
        (crate::registry::registration(key).build)(expression)
    }

    pub fn key(&self) -> Key {
        match self {
            Filter::Author(_) => AuthorFilter::KEY,
            Filter::Keyword(_) => KeywordFilter::KEY,
            Filter::LastActivity(_) => LastActivityFilter::KEY,
            Filter::LastCommit(_) => LastCommitFilter::KEY,
            Filter::License(_) => LicenseFilter::KEY,
            Filter::Platform(_) => PlatformFilter::KEY,
            Filter::ProductType(_) => ProductTypeFilter::KEY,
            Filter::Stars(_) => StarsFilter::KEY,
        }
    }

    pub fn predicate(&self) -> &Predicate {
        each_filter!(self, f => f.predicate())
    }

    pub fn chip(&self) -> FilterChip {
        each_filter!(self, f => f.chip())
    }

    /// Compiles the filter into its `left operator right` triple.
    pub fn compile(&self) -> CompiledFilter {
        each_filter!(self, f => f.compile())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
