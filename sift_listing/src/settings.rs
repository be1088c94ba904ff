// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML-backed settings for the filter controls and the listing query.

use serde::Deserialize;
use sift_calendar::WeekStart;
use sift_suggest::SuggestConfig;
use thiserror::Error;

/// Errors raised while loading [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The document is not valid TOML or does not match the settings shape.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Paging and proximity settings for the listing query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Results per page.
    pub per_page: u32,
    /// Search radius around a selected place, in the provider's distance syntax.
    pub proximity_radius: String,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            per_page: 6,
            proximity_radius: "50mi".to_owned(),
        }
    }
}

/// All settings, with every key optional.
///
/// ```toml
/// week_start = "monday"
///
/// [suggest]
/// min_query_chars = 3
/// result_limit = 5
///
/// [listing]
/// per_page = 6
/// proximity_radius = "50mi"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First column of the calendar grid.
    pub week_start: WeekStart,
    /// Suggestion search tuning.
    pub suggest: SuggestConfig,
    /// Listing query settings.
    pub listing: ListingSettings,
}

impl Settings {
    /// Parses and validates settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.suggest.min_query_chars == 0 {
            return Err(SettingsError::Invalid {
                field: "suggest.min_query_chars",
                reason: "must be at least 1",
            });
        }
        if self.suggest.result_limit == 0 {
            return Err(SettingsError::Invalid {
                field: "suggest.result_limit",
                reason: "must be at least 1",
            });
        }
        if self.listing.per_page == 0 {
            return Err(SettingsError::Invalid {
                field: "listing.per_page",
                reason: "must be at least 1",
            });
        }
        if self.listing.proximity_radius.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "listing.proximity_radius",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
