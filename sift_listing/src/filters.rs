// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committed filter state for the listing view.

use chrono::NaiveDate;
use sift_calendar::WeekStart;
use sift_draft::DraftFilter;
use sift_suggest::Place;

use crate::{DateFilterPanel, DateWindow, ListingQuery, ListingSettings, LocationFilter};

/// Every committed filter of the listing view.
///
/// Region and place are mutually exclusive: activating one clears the other. Any
/// change to a filter sends paging back to the first page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingFilters {
    region: Option<String>,
    place: Option<Place>,
    window: DateWindow,
    featured: bool,
    page: u32,
}

impl ListingFilters {
    /// Creates filters with only a date window set.
    #[must_use]
    pub fn new(window: DateWindow) -> Self {
        Self {
            region: None,
            place: None,
            window,
            featured: false,
            page: 1,
        }
    }

    /// Creates filters covering [`DateWindow::current_month`].
    #[must_use]
    pub fn for_current_month() -> Self {
        Self::new(DateWindow::current_month())
    }

    /// Active region code.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Active place.
    #[must_use]
    pub fn place(&self) -> Option<&Place> {
        self.place.as_ref()
    }

    /// Committed date window.
    #[must_use]
    pub const fn window(&self) -> DateWindow {
        self.window
    }

    /// Whether only featured listings are shown.
    #[must_use]
    pub const fn featured(&self) -> bool {
        self.featured
    }

    /// Current one-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Sets or clears the region. An empty code clears it.
    ///
    /// Setting a region clears the place.
    pub fn set_region(&mut self, code: Option<String>) {
        let code = code.filter(|c| !c.is_empty());
        if code.is_some() && self.place.take().is_some() {
            tracing::debug!("region selected, clearing place");
        }
        self.region = code;
        self.page = 1;
    }

    /// Activates a place, clearing the region.
    pub fn select_place(&mut self, place: Place) {
        if self.region.take().is_some() {
            tracing::debug!("place selected, clearing region");
        }
        self.place = Some(place);
        self.page = 1;
    }

    /// Clears the place.
    pub fn clear_place(&mut self) {
        self.place = None;
        self.page = 1;
    }

    /// Replaces the date window.
    pub fn set_window(&mut self, window: DateWindow) {
        self.window = window;
        self.page = 1;
    }

    /// Flips the featured-only toggle.
    pub fn toggle_featured(&mut self) {
        self.featured = !self.featured;
        self.page = 1;
    }

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Moves to the previous page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Opens a draft over the region filter; applying it goes through
    /// [`set_region`](Self::set_region).
    pub fn region_panel(&mut self) -> DraftFilter<Option<String>, impl FnMut(Option<String>) + '_> {
        DraftFilter::open(self.region.clone(), move |code| self.set_region(code))
    }

    /// Opens the date filter panel; applying it goes through
    /// [`set_window`](Self::set_window).
    pub fn date_panel(
        &mut self,
        visible_month: NaiveDate,
        week_start: WeekStart,
    ) -> DateFilterPanel<impl FnMut(DateWindow) + '_> {
        DateFilterPanel::open(self.window, visible_month, week_start, move |window| {
            self.set_window(window);
        })
    }

    /// Query variables for the current page.
    #[must_use]
    pub fn query(&self, settings: &ListingSettings) -> ListingQuery {
        ListingQuery {
            per_page: settings.per_page,
            page: self.page,
            country_code: self.region.clone(),
            after_date: self.window.start,
            before_date: self.window.end,
            featured: self.featured,
            location: self.place.as_ref().map(|place| LocationFilter {
                distance_from: format!("{},{}", place.latitude, place.longitude),
                distance: settings.proximity_radius.clone(),
            }),
        }
    }
}
