// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of product a package vends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Executable,
    Library,
    Plugin,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Executable,
        ProductType::Library,
        ProductType::Plugin,
    ];

    /// Returns the key used in the product types JSON column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Executable => "executable",
            ProductType::Library => "library",
            ProductType::Plugin => "plugin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Executable => "Executable",
            ProductType::Library => "Library",
            ProductType::Plugin => "Plugin",
        }
    }

    /// Looks up a product type by name, ignoring case.
    pub fn from_name(name: &str) -> Option<ProductType> {
        match name.to_lowercase().as_str() {
            "executable" => Some(ProductType::Executable),
            "library" => Some(ProductType::Library),
            "plugin" => Some(ProductType::Plugin),
            _ => None,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
