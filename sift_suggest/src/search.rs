// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The suggestion search controller.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{LocationProvider, LocationRecord, LookupError, Place};

/// Tuning for [`SuggestionSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Shortest query, in characters, that issues a lookup.
    pub min_query_chars: usize,
    /// Most suggestions kept from a single lookup.
    pub result_limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 3,
            result_limit: 5,
        }
    }
}

/// Marker for the query a lookup was issued for.
///
/// Advances on every query change, so a response can be matched against the query
/// that is current when it arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A lookup the host should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    generation: Generation,
    query: String,
    limit: usize,
}

impl LookupRequest {
    /// Generation this request belongs to.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Text to look up.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Most records wanted.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Wraps a provider result as the response to this request.
    #[must_use]
    pub fn respond(&self, result: Result<Vec<LocationRecord>, LookupError>) -> LookupResponse {
        LookupResponse {
            generation: self.generation,
            result,
        }
    }

    /// Performs the lookup against `provider`.
    pub async fn run<P>(self, provider: &P) -> LookupResponse
    where
        P: LocationProvider + ?Sized,
    {
        let result = provider.lookup(&self.query, self.limit).await;
        self.respond(result)
    }
}

/// A completed lookup, fed back through [`SuggestionSearch::on_lookup_complete`].
#[derive(Clone, Debug, PartialEq)]
pub struct LookupResponse {
    /// Generation of the originating request.
    pub generation: Generation,
    /// What the provider returned.
    pub result: Result<Vec<LocationRecord>, LookupError>,
}

/// What [`SuggestionSearch::on_lookup_complete`] did with a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Suggestions were replaced with this many places and the panel opened.
    Applied(usize),
    /// The query changed since the request; nothing changed.
    Stale,
    /// The lookup failed; nothing changed.
    Failed,
}

/// Free-text location search with a suggestion panel.
///
/// The controller never performs I/O itself. [`on_query_change`](Self::on_query_change)
/// hands back a [`LookupRequest`], the host runs it however it likes, and the response
/// comes back through [`on_lookup_complete`](Self::on_lookup_complete). Responses for a
/// query that has since changed are dropped on arrival, so a slow response can never
/// overwrite a newer one.
///
/// `C` receives the selected [`Place`]. Selection is an immediate commit; there is no
/// draft to cancel.
pub struct SuggestionSearch<C> {
    config: SuggestConfig,
    query: String,
    suggestions: SmallVec<[Place; 5]>,
    is_open: bool,
    generation: Generation,
    commit: C,
}

impl<C> SuggestionSearch<C>
where
    C: FnMut(Place),
{
    /// Creates an empty, closed search using the default [`SuggestConfig`].
    pub fn new(commit: C) -> Self {
        Self::with_config(SuggestConfig::default(), commit)
    }

    /// Creates an empty, closed search.
    pub fn with_config(config: SuggestConfig, commit: C) -> Self {
        Self {
            config,
            query: String::new(),
            suggestions: SmallVec::new(),
            is_open: false,
            generation: Generation::default(),
            commit,
        }
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current suggestions, best first.
    #[must_use]
    pub fn suggestions(&self) -> &[Place] {
        &self.suggestions
    }

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the panel should be drawn: open and non-empty.
    #[must_use]
    pub fn is_panel_visible(&self) -> bool {
        self.is_open && !self.suggestions.is_empty()
    }

    /// Generation of the current query.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Handles an edit of the query text.
    ///
    /// Queries shorter than [`SuggestConfig::min_query_chars`] clear the suggestions
    /// and close the panel without a lookup. Longer queries return the lookup the host
    /// should run. Either way, responses to earlier queries become stale.
    pub fn on_query_change(&mut self, text: impl Into<String>) -> Option<LookupRequest> {
        let text = text.into();
        if text.chars().count() < self.config.min_query_chars {
            self.query = text;
            self.generation = self.generation.next();
            self.suggestions.clear();
            self.is_open = false;
            return None;
        }
        if text == self.query {
            return None;
        }

        self.query = text;
        self.generation = self.generation.next();
        tracing::trace!(
            generation = self.generation.0,
            query = %self.query,
            "location lookup issued"
        );
        Some(LookupRequest {
            generation: self.generation,
            query: self.query.clone(),
            limit: self.config.result_limit,
        })
    }

    /// Handles a finished lookup.
    pub fn on_lookup_complete(&mut self, response: LookupResponse) -> LookupOutcome {
        if response.generation != self.generation {
            tracing::debug!(
                generation = response.generation.0,
                current = self.generation.0,
                "discarding stale location response"
            );
            return LookupOutcome::Stale;
        }
        match response.result {
            Ok(records) => {
                self.suggestions = records
                    .into_iter()
                    .take(self.config.result_limit)
                    .map(Place::from)
                    .collect();
                self.is_open = true;
                LookupOutcome::Applied(self.suggestions.len())
            }
            Err(err) => {
                tracing::warn!(query = %self.query, error = %err, "location lookup failed");
                LookupOutcome::Failed
            }
        }
    }

    /// Re-opens the panel when there are suggestions to show.
    pub fn on_focus(&mut self) {
        if !self.suggestions.is_empty() {
            self.is_open = true;
        }
    }

    /// Commits `place`: writes its name into the query, closes the panel, and reports it.
    ///
    /// Suggestions are kept so a later focus can show them again. Any lookup still in
    /// flight becomes stale.
    pub fn on_select(&mut self, place: Place) {
        tracing::debug!(id = %place.id, name = %place.name, "place selected");
        self.query.clone_from(&place.name);
        self.generation = self.generation.next();
        self.is_open = false;
        (self.commit)(place);
    }

    /// Commits the suggestion at `index`. Returns `false` if there is none.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.suggestions.get(index).cloned() {
            Some(place) => {
                self.on_select(place);
                true
            }
            None => false,
        }
    }

    /// Closes the panel in response to an interaction outside the search box.
    ///
    /// Query and suggestions are left as they are.
    pub fn on_outside_interaction(&mut self) {
        self.is_open = false;
    }
}

impl<C> fmt::Debug for SuggestionSearch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionSearch")
            .field("config", &self.config)
            .field("query", &self.query)
            .field("suggestions", &self.suggestions)
            .field("is_open", &self.is_open)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use core::cell::RefCell;

    use super::*;
    use crate::StaticProvider;

    fn records(names: &[&str]) -> Vec<LocationRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                LocationRecord::new(format!("place.{i}"), *name, i as f64, -(i as f64))
            })
            .collect()
    }

    #[test]
    fn short_query_issues_nothing() {
        let mut search = SuggestionSearch::new(|_| {});
        assert_eq!(search.on_query_change("Lo"), None);
        assert!(search.suggestions().is_empty());
        assert!(!search.is_open());
    }

    #[test]
    fn short_query_counts_characters_not_bytes() {
        let mut search = SuggestionSearch::new(|_| {});
        // Two characters, four bytes.
        assert_eq!(search.on_query_change("Ös"), None);
        assert!(search.on_query_change("Ösl").is_some());
    }

    #[test]
    fn shortening_query_clears_and_closes() {
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("Lond").unwrap();
        search.on_lookup_complete(req.respond(Ok(records(&["London"]))));
        assert!(search.is_panel_visible());

        assert_eq!(search.on_query_change("Lo"), None);
        assert!(search.suggestions().is_empty());
        assert!(!search.is_open());
        // The earlier response can no longer reopen the panel.
        assert_eq!(
            search.on_lookup_complete(req.respond(Ok(records(&["London"])))),
            LookupOutcome::Stale
        );
        assert!(!search.is_open());
    }

    #[test]
    fn unchanged_query_does_not_reissue() {
        let mut search = SuggestionSearch::new(|_| {});
        assert!(search.on_query_change("Lon").is_some());
        assert_eq!(search.on_query_change("Lon"), None);
    }

    #[test]
    fn stale_response_is_discarded_in_either_order() {
        let mut search = SuggestionSearch::new(|_| {});
        let first = search.on_query_change("Lon").unwrap();
        let second = search.on_query_change("Lond").unwrap();

        let second_outcome =
            search.on_lookup_complete(second.respond(Ok(records(&["London", "Londrina"]))));
        let first_outcome = search.on_lookup_complete(first.respond(Ok(records(&["Longview"]))));

        assert_eq!(second_outcome, LookupOutcome::Applied(2));
        assert_eq!(first_outcome, LookupOutcome::Stale);
        assert_eq!(search.suggestions()[0].name, "London");
    }

    #[test]
    fn failure_keeps_previous_state() {
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("Lon").unwrap();
        search.on_lookup_complete(req.respond(Ok(records(&["London"]))));

        let req = search.on_query_change("Lonx").unwrap();
        let outcome =
            search.on_lookup_complete(req.respond(Err(LookupError::Unavailable("offline".into()))));

        assert_eq!(outcome, LookupOutcome::Failed);
        assert_eq!(search.suggestions().len(), 1);
        assert!(search.is_open());
    }

    #[test]
    fn failure_while_dismissed_stays_closed() {
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("Lon").unwrap();
        search.on_lookup_complete(req.respond(Ok(records(&["London"]))));
        search.on_outside_interaction();

        let req = search.on_query_change("Lonx").unwrap();
        let outcome = search.on_lookup_complete(req.respond(Err(LookupError::Rejected {
            status: 503,
            message: "busy".into(),
        })));

        assert_eq!(outcome, LookupOutcome::Failed);
        assert!(!search.is_open());
        assert_eq!(search.suggestions().len(), 1);
        assert_eq!(search.suggestions()[0].name, "London");
    }

    #[test]
    fn empty_result_opens_without_visible_panel() {
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("Zzyzx").unwrap();
        let outcome = search.on_lookup_complete(req.respond(Ok(Vec::new())));

        assert_eq!(outcome, LookupOutcome::Applied(0));
        assert!(search.is_open());
        assert!(!search.is_panel_visible());
    }

    #[test]
    fn results_are_bounded_by_limit() {
        let mut search = SuggestionSearch::with_config(
            SuggestConfig {
                min_query_chars: 3,
                result_limit: 2,
            },
            |_| {},
        );
        let req = search.on_query_change("San").unwrap();
        assert_eq!(req.limit(), 2);
        let outcome = search.on_lookup_complete(req.respond(Ok(records(&["A", "B", "C"]))));
        assert_eq!(outcome, LookupOutcome::Applied(2));
    }

    #[test]
    fn outside_interaction_then_focus_reopens() {
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("Lon").unwrap();
        search.on_lookup_complete(req.respond(Ok(records(&["London"]))));

        search.on_outside_interaction();
        assert!(!search.is_open());
        assert_eq!(search.query(), "Lon");
        assert_eq!(search.suggestions().len(), 1);

        search.on_focus();
        assert!(search.is_open());
    }

    #[test]
    fn focus_without_suggestions_stays_closed() {
        let mut search = SuggestionSearch::new(|_| {});
        search.on_focus();
        assert!(!search.is_open());
    }

    #[test]
    fn select_commits_and_closes() {
        let committed = RefCell::new(Vec::new());
        let mut search = SuggestionSearch::new(|p| committed.borrow_mut().push(p));
        let req = search.on_query_change("Lon").unwrap();
        search.on_lookup_complete(req.respond(Ok(records(&["London", "Londonderry"]))));

        assert!(search.select_index(1));
        assert_eq!(search.query(), "Londonderry");
        assert!(!search.is_open());
        assert_eq!(search.suggestions().len(), 2);
        assert!(!search.select_index(7));
        drop(search);

        let committed = committed.into_inner();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].name, "Londonderry");
    }

    #[test]
    fn select_makes_in_flight_lookup_stale() {
        let mut search = SuggestionSearch::new(|_| {});
        let first = search.on_query_change("Lon").unwrap();
        search.on_lookup_complete(first.respond(Ok(records(&["London"]))));
        let pending = search.on_query_change("Lond").unwrap();

        assert!(search.select_index(0));
        let outcome = search.on_lookup_complete(pending.respond(Ok(records(&["Londrina"]))));
        assert_eq!(outcome, LookupOutcome::Stale);
        assert!(!search.is_open());
    }

    #[tokio::test]
    async fn run_drives_provider() {
        let provider = StaticProvider::new(records(&["London", "Lyon", "Londrina"]));
        let mut search = SuggestionSearch::new(|_| {});
        let req = search.on_query_change("lond").unwrap();
        let response = req.run(&provider).await;
        assert_eq!(search.on_lookup_complete(response), LookupOutcome::Applied(2));
        assert_eq!(search.suggestions()[1].name, "Londrina");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SuggestConfig = serde_json::from_str(r#"{ "result_limit": 8 }"#).unwrap();
        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.result_limit, 8);
    }
}
