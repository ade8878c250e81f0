// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Known package licenses and the kinds they are grouped into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping of licenses by App Store compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum LicenseKind {
    /// Permissive licenses that can ship in App Store apps.
    CompatibleWithAppStore,
    /// Copyleft licenses that cannot.
    IncompatibleWithAppStore,
    /// A license file exists but was not recognized.
    Other,
    /// No license was found.
    None,
}

impl LicenseKind {
    /// Parses the argument accepted by `license:<kind>`.
    pub fn from_argument(argument: &str) -> Option<LicenseKind> {
        match argument.to_lowercase().as_str() {
            "compatible" => Some(LicenseKind::CompatibleWithAppStore),
            "incompatible" => Some(LicenseKind::IncompatibleWithAppStore),
            "other" => Some(LicenseKind::Other),
            "none" => Some(LicenseKind::None),
            _ => None,
        }
    }

    /// Returns the argument users type for this kind.
    pub fn argument(&self) -> &'static str {
        match self {
            LicenseKind::CompatibleWithAppStore => "compatible",
            LicenseKind::IncompatibleWithAppStore => "incompatible",
            LicenseKind::Other => "other",
            LicenseKind::None => "none",
        }
    }

    /// Returns the label shown on filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            LicenseKind::CompatibleWithAppStore => "compatible with the App Store",
            LicenseKind::IncompatibleWithAppStore => "incompatible with the App Store",
            LicenseKind::Other => "unknown",
            LicenseKind::None => "not defined",
        }
    }

    /// All licenses of this kind, in catalog order.
    pub fn licenses(&self) -> impl Iterator<Item = &'static License> {
        let kind = *self;
        LICENSES.iter().filter(move |license| license.kind == kind)
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A known license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct License {
    /// Lowercase identifier stored in the `license` column.
    pub id: &'static str,
    /// Short display name.
    pub name: &'static str,
    pub kind: LicenseKind,
}

impl License {
    const fn new(id: &'static str, name: &'static str, kind: LicenseKind) -> Self {
        License { id, name, kind }
    }

    /// Looks up a license by identifier, ignoring case.
    pub fn from_name(name: &str) -> Option<&'static License> {
        let name = name.to_lowercase();
        LICENSES.iter().find(|license| license.id == name)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

use LicenseKind::{CompatibleWithAppStore as Compatible, IncompatibleWithAppStore as Incompatible};

/// Every known license.
pub static LICENSES: [License; 38] = [
    License::new("afl-3.0", "AFL 3.0", Compatible),
    License::new("apache-2.0", "Apache 2.0", Compatible),
    License::new("artistic-2.0", "Artistic 2.0", Compatible),
    License::new("bsd-2-clause", "BSD 2-Clause", Compatible),
    License::new("bsd-3-clause", "BSD 3-Clause", Compatible),
    License::new("bsd-3-clause-clear", "BSD 3-Clause Clear", Compatible),
    License::new("bsl-1.0", "BSL 1.0", Compatible),
    License::new("cc", "CC", Compatible),
    License::new("cc0-1.0", "CC0 1.0", Compatible),
    License::new("cc-by-4.0", "CC BY 4.0", Compatible),
    License::new("cc-by-sa-4.0", "CC BY-SA 4.0", Compatible),
    License::new("ecl-2.0", "ECL 2.0", Compatible),
    License::new("epl-1.0", "EPL 1.0", Compatible),
    License::new("epl-2.0", "EPL 2.0", Compatible),
    License::new("eupl-1.1", "EUPL 1.1", Compatible),
    License::new("agpl-3.0", "AGPL 3.0", Incompatible),
    License::new("gpl", "GPL", Incompatible),
    License::new("gpl-2.0", "GPL 2.0", Incompatible),
    License::new("gpl-3.0", "GPL 3.0", Incompatible),
    License::new("isc", "ISC", Compatible),
    License::new("lgpl", "LGPL", Incompatible),
    License::new("lgpl-2.1", "LGPL 2.1", Incompatible),
    License::new("lgpl-3.0", "LGPL 3.0", Incompatible),
    License::new("lppl-1.3c", "LPPL 1.3c", Compatible),
    License::new("mit", "MIT", Compatible),
    License::new("mpl-2.0", "MPL 2.0", Compatible),
    License::new("ms-pl", "MS-PL", Compatible),
    License::new("ncsa", "NCSA", Compatible),
    License::new("odbl-1.0", "ODbL 1.0", Compatible),
    License::new("ofl-1.1", "OFL 1.1", Compatible),
    License::new("osl-3.0", "OSL 3.0", Compatible),
    License::new("postgresql", "PostgreSQL", Compatible),
    License::new("unlicense", "Unlicense", Compatible),
    License::new("upl-1.0", "UPL 1.0", Compatible),
    License::new("wtfpl", "WTFPL", Compatible),
    License::new("zlib", "zlib", Compatible),
    License::new("other", "Unknown license", LicenseKind::Other),
    License::new("none", "No license", LicenseKind::None),
];
