// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date filter panel: a draft window driven by a range calendar.

use chrono::NaiveDate;
use sift_calendar::{CalendarSelection, DateRange, RangeCalendar, WeekStart};
use sift_draft::DraftFilter;

use crate::DateWindow;

/// Draft date window edited through a [`RangeCalendar`].
///
/// Only completed ranges reach the draft; a half-finished selection leaves the draft
/// at its previous value, so applying mid-selection commits the last complete range.
#[derive(Debug)]
pub struct DateFilterPanel<C> {
    draft: DraftFilter<DateWindow, C>,
    calendar: RangeCalendar,
}

impl<C> DateFilterPanel<C>
where
    C: FnMut(DateWindow),
{
    /// Opens the panel over `committed`, showing the month containing `visible_month`.
    pub fn open(
        committed: DateWindow,
        visible_month: NaiveDate,
        week_start: WeekStart,
        commit: C,
    ) -> Self {
        Self {
            calendar: RangeCalendar::new(committed.to_selection(), visible_month, week_start),
            draft: DraftFilter::open(committed, commit),
        }
    }

    /// The calendar, for rendering.
    #[must_use]
    pub const fn calendar(&self) -> &RangeCalendar {
        &self.calendar
    }

    /// Current draft window.
    #[must_use]
    pub fn draft(&self) -> &DateWindow {
        self.draft.draft()
    }

    /// Whether cancelling would discard a change.
    #[must_use]
    pub fn can_cancel(&self) -> bool {
        self.draft.can_cancel()
    }

    /// Forwards a day click to the calendar; a completed range becomes the draft.
    pub fn click(&mut self, day: NaiveDate) -> Option<DateRange> {
        let range = self.calendar.click(day)?;
        self.draft.set_draft(range.into());
        Some(range)
    }

    /// Shows the previous month.
    pub fn prev_month(&mut self) {
        self.calendar.prev_month();
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.calendar.next_month();
    }

    /// Commits the draft window.
    pub fn apply(&mut self) {
        self.draft.apply();
    }

    /// Discards the draft and re-seeds the calendar from the committed window.
    ///
    /// The visible month is kept.
    pub fn reset(&mut self) {
        self.draft.reset();
        let selection: CalendarSelection = self.draft.committed().to_selection();
        self.calendar = RangeCalendar::new(
            selection,
            self.calendar.visible_month(),
            self.calendar.week_start(),
        );
    }
}
