// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sift Suggest: incremental location search.
//!
//! [`SuggestionSearch`] owns a query string, a short list of [`Place`] suggestions, and
//! whether the suggestion panel is open. It reacts to four host events:
//!
//! - **Query change**: short queries clear and close; longer ones produce a
//!   [`LookupRequest`] for the host to run.
//! - **Lookup complete**: the newest query's records replace the suggestions and open
//!   the panel. Responses to superseded queries are dropped; failures change nothing.
//! - **Focus / outside interaction**: reopen (if there is something to show) or close,
//!   without touching the query or the suggestions.
//! - **Select**: the place's name becomes the query, the panel closes, and the place is
//!   handed to the host's commit callback.
//!
//! There is no time-based debounce. The minimum query length is the only gate in front
//! of the provider.
//!
//! ## Driving lookups
//!
//! The controller is single-threaded and does no I/O. Hosts run requests against a
//! [`LocationProvider`] on whatever executor they have and feed the
//! [`LookupResponse`] back. Requests carry a [`Generation`], so responses may arrive in
//! any order:
//!
//! ```rust
//! use sift_suggest::{LocationRecord, LookupOutcome, Place, SuggestionSearch};
//!
//! let mut search = SuggestionSearch::new(|place: Place| println!("selected {}", place.name));
//!
//! let slow = search.on_query_change("Lon").unwrap();
//! let fast = search.on_query_change("Lond").unwrap();
//!
//! let london = LocationRecord::new("place.1", "London", -0.12, 51.5);
//! assert_eq!(
//!     search.on_lookup_complete(fast.respond(Ok(vec![london]))),
//!     LookupOutcome::Applied(1),
//! );
//! // The older request resolves last and is ignored.
//! assert_eq!(
//!     search.on_lookup_complete(slow.respond(Ok(vec![]))),
//!     LookupOutcome::Stale,
//! );
//! assert!(search.is_panel_visible());
//!
//! assert!(search.select_index(0));
//! assert_eq!(search.query(), "London");
//! assert!(!search.is_open());
//! ```
//!
//! With an async provider, `request.run(&provider).await` produces the response.
//!
//! ## Features
//!
//! - `std` (enabled by default): scoped `tracing` dispatchers.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod place;
mod provider;
mod search;

pub use place::{LocationRecord, Place, PointGeometry};
pub use provider::{LocationProvider, LookupError, StaticProvider};
pub use search::{
    Generation, LookupOutcome, LookupRequest, LookupResponse, SuggestConfig, SuggestionSearch,
};
