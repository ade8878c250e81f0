// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform packages can declare compatibility with.
///
/// Variants are declared in identifier order so that sorted sets of
/// platforms come out ordered by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "ios")]
    IOS,
    Linux,
    #[serde(rename = "macos")]
    MacOS,
    #[serde(rename = "tvos")]
    TvOS,
    #[serde(rename = "visionos")]
    VisionOS,
    #[serde(rename = "watchos")]
    WatchOS,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::IOS,
        Platform::Linux,
        Platform::MacOS,
        Platform::TvOS,
        Platform::VisionOS,
        Platform::WatchOS,
    ];

    /// Returns the identifier stored in the compatibility column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::IOS => "ios",
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::TvOS => "tvos",
            Platform::VisionOS => "visionos",
            Platform::WatchOS => "watchos",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::IOS => "iOS",
            Platform::Linux => "Linux",
            Platform::MacOS => "macOS",
            Platform::TvOS => "tvOS",
            Platform::VisionOS => "visionOS",
            Platform::WatchOS => "watchOS",
        }
    }

    /// Looks up a platform by identifier, ignoring case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Option<Platform> {
        let name = name.trim().to_lowercase();
        Platform::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
