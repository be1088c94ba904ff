// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed region choice list.

/// One selectable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionOption {
    /// Code passed to the listing query.
    pub code: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Regions offered by the region filter, in display order.
pub const REGION_OPTIONS: &[RegionOption] = &[
    RegionOption {
        code: "CA",
        label: "Canada",
    },
    RegionOption {
        code: "FR",
        label: "France",
    },
    RegionOption {
        code: "JP",
        label: "Japan",
    },
    RegionOption {
        code: "UK",
        label: "United Kingdom",
    },
    RegionOption {
        code: "US",
        label: "USA",
    },
];

/// Looks up a region by code.
#[must_use]
pub fn region_by_code(code: &str) -> Option<&'static RegionOption> {
    REGION_OPTIONS.iter().find(|r| r.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_codes_only() {
        assert_eq!(region_by_code("JP").map(|r| r.label), Some("Japan"));
        assert_eq!(region_by_code("jp"), None);
        assert_eq!(region_by_code(""), None);
    }
}
