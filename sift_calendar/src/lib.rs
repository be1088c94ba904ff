// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sift Calendar: two-click date range selection.
//!
//! A [`RangeCalendar`] pairs a [`CalendarSelection`] with a visible month. Day clicks
//! drive the selection through three states:
//!
//! - [`CalendarSelection::Empty`]: nothing selected.
//! - [`CalendarSelection::Partial`]: a start day, end pending.
//! - [`CalendarSelection::Complete`]: a [`DateRange`] with `start < end`.
//!
//! Transition on a click on day `D`:
//!
//! 1. From `Empty` or `Complete`: restart at `Partial { start: D }`. A completed range is
//!    never extended.
//! 2. From `Partial { start }` with `D > start`: `Complete(start..=D)`.
//! 3. From `Partial { start }` with `D <= start`: restart at `Partial { start: D }`.
//!
//! Rule 3 means a one-day range is unreachable through two clicks. That is intended:
//! this picker always yields at least two days.
//!
//! Only the click that completes a range reports it; hosts never see a partial
//! selection as a range.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sift_calendar::{CalendarSelection, RangeCalendar, WeekStart};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
//! let mut cal = RangeCalendar::new(CalendarSelection::Empty, day(1), WeekStart::Sunday);
//!
//! assert_eq!(cal.click(day(5)), None);
//! let range = cal.click(day(10)).unwrap();
//! assert_eq!((range.start(), range.end()), (day(5), day(10)));
//!
//! // A third click starts over.
//! assert_eq!(cal.click(day(3)), None);
//! assert_eq!(cal.selection().start(), Some(day(3)));
//! ```
//!
//! ## Grid and disabled days
//!
//! [`RangeCalendar::grid`] returns whole weeks: leading and trailing days from adjacent
//! months pad the first and last rows. Those cells carry [`DayFlags::OUTSIDE_MONTH`] and
//! [`DayFlags::DISABLED`]. Disabling is a rendering hint only; the state machine accepts
//! a click on any day, and clicking a padding day does not change the visible month.
//! Month changes happen only through [`RangeCalendar::prev_month`] and
//! [`RangeCalendar::next_month`].
//!
//! ## Features
//!
//! - `std` (enabled by default): reads the local clock for [`today`] and
//!   [`RangeCalendar::for_today`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod calendar;
mod grid;
mod selection;

pub use calendar::RangeCalendar;
#[cfg(feature = "std")]
pub use calendar::today;
pub use grid::{DayCell, DayFlags, WeekStart, month_grid};
pub use selection::{CalendarSelection, DateRange};
