// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection state and the day-click transition.

use chrono::{DateTime, NaiveDate, NaiveTime};

/// A completed date range with `start < end`.
///
/// Both bounds are inclusive calendar days. A one-day range cannot be expressed:
/// the two-click flow restarts on a second click that is on or before the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, or `None` unless `start` is strictly before `end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `day` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Converts the range to `(start, end)` epoch seconds.
    ///
    /// Each bound is the UTC midnight that begins its day.
    #[must_use]
    pub fn to_epoch_window(&self) -> (i64, i64) {
        (day_to_epoch(self.start), day_to_epoch(self.end))
    }
}

/// Where the two-click flow currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CalendarSelection {
    /// Nothing selected.
    #[default]
    Empty,
    /// A start day is selected and the end is pending.
    Partial {
        /// The selected start day.
        start: NaiveDate,
    },
    /// Both bounds are selected.
    Complete(DateRange),
}

impl CalendarSelection {
    /// Builds a selection from loose bounds.
    ///
    /// An end without a start is dropped. A start on or after the end keeps only the
    /// start, leaving the selection partial.
    #[must_use]
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (None, _) => Self::Empty,
            (Some(start), None) => Self::Partial { start },
            (Some(start), Some(end)) => DateRange::new(start, end)
                .map_or(Self::Partial { start }, Self::Complete),
        }
    }

    /// Seeds a selection from a committed window in epoch seconds.
    ///
    /// A bound of `0` means "unset". That sentinel is also 1970-01-01T00:00:00Z, so a
    /// window starting on that day cannot be represented and seeds as `Empty`.
    #[must_use]
    pub fn from_epoch_window(start: i64, end: i64) -> Self {
        Self::from_bounds(epoch_to_day(start), epoch_to_day(end))
    }

    /// Selected start day, if any.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::Empty => None,
            Self::Partial { start } => Some(*start),
            Self::Complete(range) => Some(range.start),
        }
    }

    /// Selected end day, if any.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::Complete(range) => Some(range.end),
            _ => None,
        }
    }

    /// The completed range, if both bounds are selected.
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        match self {
            Self::Complete(range) => Some(*range),
            _ => None,
        }
    }

    /// Applies a click on `day`.
    ///
    /// - From `Empty` or `Complete`, the click starts a new selection.
    /// - From `Partial`, a day strictly after the start completes the range.
    /// - From `Partial`, a day on or before the start becomes the new start.
    #[must_use]
    pub fn select(self, day: NaiveDate) -> Self {
        match self {
            Self::Partial { start } if day > start => Self::Complete(DateRange { start, end: day }),
            _ => Self::Partial { start: day },
        }
    }
}

fn day_to_epoch(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn epoch_to_day(secs: i64) -> Option<NaiveDate> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}
