// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closed vocabularies that filter values are validated against.

mod license;
mod platform;
mod product_type;

pub use license::{License, LicenseKind, LICENSES};
pub use platform::Platform;
pub use product_type::ProductType;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
