// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property and scenario tests for suggestion search.

use std::cell::RefCell;

use proptest::prelude::*;
use sift_suggest::{
    LocationRecord, LookupOutcome, LookupRequest, Place, StaticProvider, SuggestionSearch,
};

fn record(name: &str) -> LocationRecord {
    LocationRecord::new(format!("id:{name}"), name, 1.0, 2.0)
}

fn open_with(search: &mut SuggestionSearch<impl FnMut(Place)>, query: &str, names: &[&str]) {
    let request = search.on_query_change(query).unwrap();
    let records = names.iter().map(|n| record(n)).collect();
    search.on_lookup_complete(request.respond(Ok(records)));
}

proptest! {
    #[test]
    fn short_queries_never_look_up(query in ".{0,2}", prior in "[a-z]{3,8}") {
        let mut search = SuggestionSearch::new(|_| {});
        open_with(&mut search, &prior, &["Somewhere"]);

        prop_assert_eq!(search.on_query_change(query), None);
        prop_assert!(!search.is_open());
        prop_assert!(search.suggestions().is_empty());
    }

    #[test]
    fn only_latest_query_wins(
        first in "[a-z]{3,6}",
        second in "[A-Z]{3,6}",
        second_resolves_first in any::<bool>(),
    ) {
        let mut search = SuggestionSearch::new(|_| {});
        let q1: LookupRequest = search.on_query_change(first.clone()).unwrap();
        let q2: LookupRequest = search.on_query_change(second.clone()).unwrap();
        let r1 = q1.respond(Ok(vec![record(&first)]));
        let r2 = q2.respond(Ok(vec![record(&second)]));

        if second_resolves_first {
            search.on_lookup_complete(r2);
            prop_assert_eq!(search.on_lookup_complete(r1), LookupOutcome::Stale);
        } else {
            prop_assert_eq!(search.on_lookup_complete(r1), LookupOutcome::Stale);
            search.on_lookup_complete(r2);
        }
        prop_assert_eq!(search.suggestions().len(), 1);
        prop_assert_eq!(&search.suggestions()[0].name, &second);
    }

    #[test]
    fn outside_interaction_preserves_query_and_suggestions(
        query in "[a-z]{3,8}",
        count in 1_usize..5,
    ) {
        let names: Vec<String> = (0..count).map(|i| format!("Place {i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut search = SuggestionSearch::new(|_| {});
        open_with(&mut search, &query, &names);
        let before: Vec<Place> = search.suggestions().to_vec();

        search.on_outside_interaction();
        prop_assert!(!search.is_open());
        prop_assert_eq!(search.query(), query.as_str());
        prop_assert_eq!(search.suggestions(), before.as_slice());

        let generation = search.generation();
        search.on_focus();
        prop_assert!(search.is_open());
        prop_assert_eq!(search.generation(), generation);
    }
}

#[tokio::test]
async fn type_look_up_and_pick_second() {
    let provider = StaticProvider::new(vec![
        record("London, England"),
        record("London, Ontario"),
        record("Londonderry, Northern Ireland"),
        record("Paris, France"),
    ]);
    let committed = RefCell::new(None);
    let mut search = SuggestionSearch::new(|place| *committed.borrow_mut() = Some(place));

    assert_eq!(search.on_query_change("Lo"), None);
    assert!(search.suggestions().is_empty());

    let request = search.on_query_change("Lon").unwrap();
    let response = request.run(&provider).await;
    assert_eq!(search.on_lookup_complete(response), LookupOutcome::Applied(3));
    assert!(search.is_open());

    assert!(search.select_index(1));
    assert_eq!(search.query(), "London, Ontario");
    assert!(!search.is_open());
    drop(search);

    let place = committed.into_inner().unwrap();
    assert_eq!(place.name, "London, Ontario");
}
