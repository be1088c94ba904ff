// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committed date window in epoch seconds.

use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sift_calendar::{CalendarSelection, DateRange};

/// A `{ start, end }` pair of epoch seconds.
///
/// This is the committed form of the date filter. A bound of `0` means "unset", so a
/// window cannot start at 1970-01-01T00:00:00Z.
///
/// Windows from [`month_of`](Self::month_of) end at the last second of the month, while
/// windows from a [`DateRange`] end at midnight starting the last day. Picking the
/// whole month in the calendar therefore yields a different, one day shorter window
/// than the one it was seeded from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    /// Earliest start time, in epoch seconds.
    pub start: i64,
    /// Latest start time, in epoch seconds.
    pub end: i64,
}

impl DateWindow {
    /// Creates a window from epoch seconds.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// The whole month containing `day`: midnight UTC of the first day through the
    /// last second of the last day.
    #[must_use]
    pub fn month_of(day: NaiveDate) -> Self {
        let first = day.with_day(1).unwrap_or(day);
        let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
        let start = first.and_time(NaiveTime::MIN).and_utc().timestamp();
        let end = next.and_time(NaiveTime::MIN).and_utc().timestamp() - 1;
        Self { start, end }
    }

    /// The month of [`sift_calendar::today`], the same clock
    /// [`RangeCalendar::for_today`](sift_calendar::RangeCalendar::for_today) reads.
    #[must_use]
    pub fn current_month() -> Self {
        Self::month_of(sift_calendar::today())
    }

    /// Calendar selection seeded from this window.
    #[must_use]
    pub fn to_selection(self) -> CalendarSelection {
        CalendarSelection::from_epoch_window(self.start, self.end)
    }
}

impl From<DateRange> for DateWindow {
    fn from(range: DateRange) -> Self {
        let (start, end) = range.to_epoch_window();
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_window_covers_whole_month() {
        let window = DateWindow::month_of(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        // 2025-02-01T00:00:00Z and 2025-02-28T23:59:59Z
        assert_eq!(window.start, 1_738_368_000);
        assert_eq!(window.end, 1_740_787_199);
    }

    #[test]
    fn month_window_seeds_complete_selection() {
        let window = DateWindow::month_of(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        let range = window.to_selection().range().unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn current_month_follows_calendar_clock() {
        let before = sift_calendar::today();
        let window = DateWindow::current_month();
        let after = sift_calendar::today();
        assert!(window == DateWindow::month_of(before) || window == DateWindow::month_of(after));

        let seeded = window.to_selection().range().unwrap();
        assert_eq!(seeded.start().day(), 1);
        assert!([before, after].iter().any(|d| seeded.contains(*d)));
    }

    #[test]
    fn whole_month_range_ends_a_day_earlier_than_month_window() {
        let month = DateWindow::month_of(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let picked = DateWindow::from(month.to_selection().range().unwrap());
        assert_eq!(picked.start, month.start);
        // 2025-01-31T00:00:00Z versus 2025-01-31T23:59:59Z
        assert_eq!(picked.end, 1_738_281_600);
        assert_eq!(month.end - picked.end, 86_399);
    }

    #[test]
    fn unset_window_seeds_empty_selection() {
        assert_eq!(DateWindow::default().to_selection(), CalendarSelection::Empty);
    }

    #[test]
    fn range_converts_to_window() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
        .unwrap();
        assert_eq!(
            DateWindow::from(range),
            DateWindow::new(1_736_035_200, 1_736_467_200)
        );
    }
}
