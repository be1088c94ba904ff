// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The range calendar controller: selection plus visible month.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{Datelike, Months, NaiveDate};

use crate::{CalendarSelection, DateRange, DayCell, WeekStart, month_grid};

/// Two-click range picker over a navigable month view.
///
/// The selection and the visible month are independent: navigating never touches the
/// selection, and clicking a day from an adjacent month never moves the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeCalendar {
    selection: CalendarSelection,
    /// Always the first day of a month.
    visible_month: NaiveDate,
    week_start: WeekStart,
}

impl RangeCalendar {
    /// Creates a calendar showing the month that contains `visible_month`.
    #[must_use]
    pub fn new(
        selection: CalendarSelection,
        visible_month: NaiveDate,
        week_start: WeekStart,
    ) -> Self {
        Self {
            selection,
            visible_month: first_of_month(visible_month),
            week_start,
        }
    }

    /// Creates a calendar showing the month of [`today`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn for_today(selection: CalendarSelection, week_start: WeekStart) -> Self {
        Self::new(selection, today(), week_start)
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &CalendarSelection {
        &self.selection
    }

    /// First day of the visible month.
    #[must_use]
    pub const fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// Week layout used by [`grid`](Self::grid).
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Handles a click on `day`.
    ///
    /// Returns the range only when this click completes it. A partial selection is
    /// never reported, so every reported range satisfies `start < end`.
    pub fn click(&mut self, day: NaiveDate) -> Option<DateRange> {
        self.selection = self.selection.select(day);
        match self.selection {
            CalendarSelection::Complete(range) => {
                tracing::debug!(start = %range.start(), end = %range.end(), "date range selected");
                Some(range)
            }
            _ => {
                tracing::trace!(start = %day, "range start selected");
                None
            }
        }
    }

    /// Shows the previous month. The selection is unchanged.
    pub fn prev_month(&mut self) {
        if let Some(month) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = month;
        }
        tracing::trace!(month = %self.visible_month, "calendar moved back");
    }

    /// Shows the next month. The selection is unchanged.
    pub fn next_month(&mut self) {
        if let Some(month) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = month;
        }
        tracing::trace!(month = %self.visible_month, "calendar moved forward");
    }

    /// Cells for the visible month, padded to whole weeks.
    #[must_use]
    pub fn grid(&self) -> Vec<DayCell> {
        month_grid(self.visible_month, self.week_start, &self.selection)
    }

    /// Header text for the visible month, for example `January 2025`.
    #[must_use]
    pub fn month_title(&self) -> String {
        self.visible_month.format("%B %Y").to_string()
    }
}

/// The current day on the local clock.
///
/// Every "current month" default in a host should derive from this, so the visible
/// month and a seeded window agree near month boundaries.
#[cfg(feature = "std")]
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}
