// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Week-aligned day grid for a visible month.

use alloc::vec::Vec;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::CalendarSelection;

/// First column of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// The weekday shown in the first column.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Column of `day` in a row that starts on `self`, in `0..7`.
    #[must_use]
    pub fn column_of(self, day: NaiveDate) -> u32 {
        let first = self.weekday().num_days_from_monday();
        (7 + day.weekday().num_days_from_monday() - first) % 7
    }
}

bitflags::bitflags! {
    /// Presentation state of a single grid cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DayFlags: u8 {
        /// Day belongs to the previous or next month (alignment padding).
        const OUTSIDE_MONTH = 0b0000_0001;
        /// Day should be drawn disabled.
        ///
        /// Presentation only: [`RangeCalendar::click`](crate::RangeCalendar::click)
        /// accepts any day regardless of this flag.
        const DISABLED      = 0b0000_0010;
        /// Day is the selected start.
        const RANGE_START   = 0b0000_0100;
        /// Day is the selected end.
        const RANGE_END     = 0b0000_1000;
        /// Day lies within a completed range, bounds included.
        const IN_RANGE      = 0b0001_0000;
    }
}

/// One cell of the day grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    /// The day this cell represents.
    pub date: NaiveDate,
    /// Presentation flags for the cell.
    pub flags: DayFlags,
}

impl DayCell {
    /// Returns `true` if this cell is either bound of the selection.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.flags.intersects(DayFlags::RANGE_START | DayFlags::RANGE_END)
    }
}

/// Computes the cells shown for the month containing `month`.
///
/// The grid spans whole weeks: from the start of the week holding the first of the
/// month through the end of the week holding its last day, so its length is always
/// a multiple of seven.
#[must_use]
pub fn month_grid(
    month: NaiveDate,
    week_start: WeekStart,
    selection: &CalendarSelection,
) -> Vec<DayCell> {
    let first = month.with_day(1).unwrap_or(month);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);

    let lead = u64::from(week_start.column_of(first));
    let trail = u64::from(6 - week_start.column_of(last));
    let grid_start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let grid_end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    let range = selection.range();
    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .map(|date| {
            let mut flags = DayFlags::empty();
            if date < first || date > last {
                flags |= DayFlags::OUTSIDE_MONTH | DayFlags::DISABLED;
            }
            if selection.start() == Some(date) {
                flags |= DayFlags::RANGE_START;
            }
            if selection.end() == Some(date) {
                flags |= DayFlags::RANGE_END;
            }
            if range.is_some_and(|r| r.contains(date)) {
                flags |= DayFlags::IN_RANGE;
            }
            DayCell { date, flags }
        })
        .collect()
}
