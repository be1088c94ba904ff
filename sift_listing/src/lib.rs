// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sift Listing: the host side of the filter controls.
//!
//! The filter crates are deliberately unaware of each other. This crate is where a
//! listing view ties them together:
//!
//! - [`ListingFilters`] holds the committed region, place, [`DateWindow`], featured
//!   toggle, and page. Region and place are mutually exclusive.
//! - [`ListingFilters::region_panel`] and [`ListingFilters::date_panel`] open
//!   [`sift_draft::DraftFilter`]-backed panels whose `apply` writes back into the filters.
//!   [`DateFilterPanel`] feeds completed [`sift_calendar::RangeCalendar`] ranges into
//!   its draft.
//! - [`ListingFilters::select_place`] is where a [`sift_suggest::SuggestionSearch`]
//!   commit lands.
//! - [`ListingFilters::query`] turns the committed state into [`ListingQuery`]
//!   variables for whatever fetches the listings.
//! - [`Settings`] loads tuning for all of the above from TOML.
//!
//! ## Minimal example
//!
//! ```rust
//! use sift_listing::{DateWindow, ListingFilters, ListingSettings};
//!
//! let mut filters = ListingFilters::new(DateWindow::new(1_735_689_600, 1_738_367_999));
//! {
//!     let mut panel = filters.region_panel();
//!     panel.set_draft(Some("JP".to_owned()));
//!     panel.apply();
//! }
//! let query = filters.query(&ListingSettings::default());
//! assert_eq!(query.country_code.as_deref(), Some("JP"));
//! assert_eq!(query.page, 1);
//! ```

mod filters;
mod panel;
mod query;
mod region;
mod settings;
mod window;

pub use filters::ListingFilters;
pub use panel::DateFilterPanel;
pub use query::{ListingQuery, LocationFilter};
pub use region::{REGION_OPTIONS, RegionOption, region_by_code};
pub use settings::{ListingSettings, Settings, SettingsError};
pub use window::DateWindow;
