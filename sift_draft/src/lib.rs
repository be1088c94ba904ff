// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sift Draft: draft-then-commit state for filter controls.
//!
//! A filter panel edits a *draft* copy of a value the host owns (the *committed* value).
//! The draft can be changed freely while the panel is open; nothing reaches the host
//! until [`DraftFilter::apply`] publishes it through the host's commit callback.
//! [`DraftFilter::reset`] throws the draft away and restores the baseline that was
//! captured when the panel opened.
//!
//! The controller is generic over the value type `T`, so the same type drives a
//! single-choice control (a region code), a date window, or anything else that is
//! `Clone + PartialEq`.
//!
//! ## Minimal example
//!
//! ```rust
//! use sift_draft::DraftFilter;
//!
//! let mut region = String::from("FR");
//! {
//!     let mut filter = DraftFilter::open(region.clone(), |v: String| region = v);
//!     assert!(!filter.can_cancel());
//!
//!     filter.set_draft(String::from("JP"));
//!     assert!(filter.can_cancel());
//!
//!     filter.apply();
//!     assert_eq!(filter.committed(), "JP");
//! }
//! assert_eq!(region, "JP");
//! ```
//!
//! ## Lifecycle
//!
//! - Open: construct one [`DraftFilter`] per panel-open, seeded with the committed value.
//! - Edit: [`DraftFilter::set_draft`] or [`DraftFilter::update_draft`].
//! - Close: either [`DraftFilter::apply`] (publish) or [`DraftFilter::reset`] (discard),
//!   then drop the controller.
//!
//! After `apply`, the applied value becomes the new baseline: a following `reset`
//! restores the applied value rather than the value the panel opened with.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

use core::fmt;

/// Draft-then-commit controller for a single filter value.
///
/// `C` is the host's commit callback. It is called exactly once per [`apply`](Self::apply)
/// with a copy of the draft, and never otherwise.
pub struct DraftFilter<T, C> {
    /// Baseline captured at open time (or at the last apply).
    committed: T,
    /// Working copy the control mutates.
    draft: T,
    commit: C,
}

impl<T, C> DraftFilter<T, C>
where
    T: Clone + PartialEq,
    C: FnMut(T),
{
    /// Opens a draft over `committed`.
    ///
    /// Both the baseline and the draft start out equal to `committed`, so
    /// [`can_cancel`](Self::can_cancel) is `false` until the draft is edited.
    pub fn open(committed: T, commit: C) -> Self {
        Self {
            draft: committed.clone(),
            committed,
            commit,
        }
    }

    /// Returns the current draft value.
    #[must_use]
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Returns the committed baseline.
    #[must_use]
    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// Replaces the draft.
    pub fn set_draft(&mut self, value: T) {
        self.draft = value;
    }

    /// Edits the draft in place.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.draft);
    }

    /// Whether the draft differs from the baseline, i.e. whether cancelling would
    /// discard anything.
    #[must_use]
    pub fn can_cancel(&self) -> bool {
        self.draft != self.committed
    }

    /// Publishes the draft to the host and makes it the new baseline.
    ///
    /// Absent values (for example `T = Option<_>` holding `None`) pass through
    /// unchanged; the host decides what an empty commit means.
    pub fn apply(&mut self) {
        tracing::debug!(changed = self.can_cancel(), "applying filter draft");
        self.committed = self.draft.clone();
        (self.commit)(self.draft.clone());
    }

    /// Discards the draft and restores the baseline.
    pub fn reset(&mut self) {
        if self.can_cancel() {
            tracing::trace!("discarding filter draft");
        }
        self.draft = self.committed.clone();
    }

    /// Consumes the controller, returning the committed baseline.
    ///
    /// Any unapplied draft is dropped.
    #[must_use]
    pub fn into_committed(self) -> T {
        self.committed
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DraftFilter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftFilter")
            .field("committed", &self.committed)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}
