// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter keys accepted in search queries.
//!
//! Each key is the user-facing half of a `key:value` search term and owns the
//! SQL identifier its predicate is compiled against. Identifiers are fixed
//! strings and are never derived from user input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Repository owner.
    Author,
    /// Package keywords (topics).
    Keyword,
    /// Date of the most recent commit, issue or pull request activity.
    LastActivity,
    /// Date of the most recent commit on the default branch.
    LastCommit,
    /// Declared license.
    License,
    /// Platform compatibility.
    Platform,
    /// Star count.
    Stars,
    /// Product type (`type:library`).
    #[serde(rename = "type")]
    ProductType,
}

impl Key {
    /// Number of keys.
    pub const COUNT: usize = 8;

    /// All keys in registration order.
    pub const ALL: [Key; Key::COUNT] = [
        Key::Author,
        Key::Keyword,
        Key::LastActivity,
        Key::LastCommit,
        Key::License,
        Key::Platform,
        Key::Stars,
        Key::ProductType,
    ];

    /// Returns the canonical key string users type before the colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Author => "author",
            Key::Keyword => "keyword",
            Key::LastActivity => "last_activity",
            Key::LastCommit => "last_commit",
            Key::License => "license",
            Key::Platform => "platform",
            Key::Stars => "stars",
            Key::ProductType => "type",
        }
    }

    /// Returns the SQL identifier this key's predicate is compiled against.
    pub fn identifier(&self) -> &'static str {
        match self {
            Key::Author => "repo_owner",
            Key::Keyword => "keywords",
            Key::LastActivity => "last_activity_at",
            Key::LastCommit => "last_commit_date",
            Key::License => "license",
            Key::Platform => "platform_compatibility",
            Key::Stars => "stars",
            Key::ProductType => "product_types",
        }
    }

    /// Returns a sample search term using this key.
    pub fn example(&self) -> &'static str {
        match self {
            Key::Author => "author:apple",
            Key::Keyword => "keyword:!networking",
            Key::LastActivity => "last_activity:>=2024-01-01",
            Key::LastCommit => "last_commit:>2020-07-01",
            Key::License => "license:compatible",
            Key::Platform => "platform:ios,macos",
            Key::Stars => "stars:>500",
            Key::ProductType => "type:library",
        }
    }

    /// Looks up a key by its canonical string. Matching is exact and
    /// case-sensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Canonical key strings, in [`Key::ALL`] order.
    pub fn names() -> Vec<&'static str> {
        Key::ALL.iter().map(Key::as_str).collect()
    }

    /// Position of this key in [`Key::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
