// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static registration table mapping keys to filter constructors.

use crate::error::Result;
use crate::expression::{Expression, ExpressionOperator};
use crate::filter::{
    AuthorFilter, Filter, KeywordFilter, LastActivityFilter, LastCommitFilter, LicenseFilter,
    PlatformFilter, ProductTypeFilter, SearchFilter, StarsFilter,
};
use crate::key::Key;

/// A registered filter key.
#[derive(Clone, Copy)]
pub struct Registration {
    pub key: Key,
    /// Operators the key's filter accepts.
    pub operators: &'static [ExpressionOperator],
    pub build: fn(&Expression) -> Result<Filter>,
}

fn build<F>(expression: &Expression) -> Result<Filter>
where
    F: SearchFilter,
    Filter: From<F>,
{
    F::new(expression).map(Filter::from)
}

macro_rules! register {
    ($filter:ty) => {
        Registration {
            key: <$filter>::KEY,
            operators: <$filter>::OPERATORS,
            build: build::<$filter>,
        }
    };
}

/// Every filter key, in [`Key::ALL`] order.
pub static REGISTRY: [Registration; Key::COUNT] = [
    register!(AuthorFilter),
    register!(KeywordFilter),
    register!(LastActivityFilter),
    register!(LastCommitFilter),
    register!(LicenseFilter),
    register!(PlatformFilter),
    register!(StarsFilter),
    register!(ProductTypeFilter),
];

/// Registration for `key`.
pub fn registration(key: Key) -> &'static Registration {
    &REGISTRY[key.index()]
}

/// Looks up a registration by the key string typed before the colon.
pub fn lookup(name: &str) -> Option<&'static Registration> {
    Key::from_name(name).map(registration)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
