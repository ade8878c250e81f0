// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pkgq-core: search filter compiler for package search
//!
//! Turns raw search terms such as `stars:>500` or `license:!gpl` into typed
//! filters, keeping everything else as plain search text:
//!
//! ```
//! use pkgq_core::{split_query, NoopMetrics};
//!
//! let result = split_query("http stars:>500 platform:ios,linux", &NoopMetrics);
//! assert_eq!(result.terms, vec!["http"]);
//! assert_eq!(result.filters.len(), 2);
//! assert_eq!(
//!     result.filters[0].chip().to_string(),
//!     "stars is greater than 500"
//! );
//! ```
//!
//! Filters compile to engine-neutral [`CompiledFilter`]s; [`sql`] renders
//! them for PostgreSQL.

pub mod catalog;
pub mod error;
pub mod expression;
pub mod filter;
pub mod key;
pub mod metrics;
pub mod predicate;
pub mod registry;
pub mod split;
pub mod sql;

pub use catalog::{License, LicenseKind, Platform, ProductType};
pub use error::{FilterError, Rejection, Result};
pub use expression::{parse_expression, Expression, ExpressionOperator};
pub use filter::{Filter, SearchFilter};
pub use key::Key;
pub use metrics::{FilterMetrics, FilterUsage, NoopMetrics};
pub use predicate::{
    BindValue, CompiledFilter, FilterChip, Operand, Predicate, PredicateOperator, Scalar,
};
pub use registry::{Registration, REGISTRY};
pub use split::{parse_filter, split, split_query, try_parse_filter, SplitResult};
pub use sql::{build_sql, build_sql_with_offset, SqlValue, WhereClause};
