// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted filter session: region panel, date panel, and place search.
//!
//! This example shows how a listing view wires the controllers together:
//! - a region panel that is edited, cancelled, then applied,
//! - a date panel driven by `sift_calendar` clicks,
//! - a place search where a slow response for an older query arrives last and is dropped,
//! - the resulting query variables for the listing retrieval.
//!
//! Run:
//! - `cargo run -p sift_demos --example filter_session`
//! - `RUST_LOG=debug cargo run -p sift_demos --example filter_session -- sift.toml`

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use sift_calendar::{DayCell, DayFlags};
use sift_listing::{DateWindow, ListingFilters, Settings, region_by_code};
use sift_suggest::{
    LocationProvider, LocationRecord, LookupError, LookupOutcome, Place, StaticProvider,
    SuggestionSearch,
};
use tokio::sync::mpsc;

/// Delays every lookup, standing in for a slow network.
#[derive(Debug)]
struct Delayed<P> {
    inner: P,
    delay: Duration,
}

#[async_trait]
impl<P: LocationProvider> LocationProvider for Delayed<P> {
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<LocationRecord>, LookupError> {
        tokio::time::sleep(self.delay).await;
        self.inner.lookup(query, limit).await
    }
}

fn gazetteer() -> StaticProvider {
    StaticProvider::new(vec![
        LocationRecord::new("place.london-uk", "London, England, United Kingdom", -0.1276, 51.5072),
        LocationRecord::new("place.london-ca", "London, Ontario, Canada", -81.2453, 42.9849),
        LocationRecord::new("place.londrina", "Londrina, Paraná, Brazil", -51.1628, -23.3045),
        LocationRecord::new("place.longview", "Longview, Texas, United States", -94.7405, 32.5007),
        LocationRecord::new("place.lyon", "Lyon, Auvergne-Rhône-Alpes, France", 4.8357, 45.764),
    ])
}

fn print_grid(title: &str, cells: &[DayCell]) {
    println!("{title:^27}");
    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let day = cell.date.day();
                if cell.flags.contains(DayFlags::DISABLED) {
                    "  .".to_owned()
                } else if cell.is_selected() {
                    format!("*{day:>2}")
                } else if cell.flags.contains(DayFlags::IN_RANGE) {
                    format!("+{day:>2}")
                } else {
                    format!("{day:>3}")
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
}

fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(Settings::from_toml_str(&std::fs::read_to_string(path)?)?),
        None => Ok(Settings::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings()?;
    tracing::info!(
        week_start = ?settings.week_start,
        per_page = settings.listing.per_page,
        "settings loaded"
    );
    let month = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("invalid demo month")?;
    let mut filters = ListingFilters::new(DateWindow::month_of(month));

    // Region: edit, cancel, edit again, apply.
    {
        let mut panel = filters.region_panel();
        panel.set_draft(Some("FR".to_owned()));
        panel.reset();
        panel.set_draft(Some("JP".to_owned()));
        println!("region draft can cancel: {}", panel.can_cancel());
        panel.apply();
    }
    let label = filters.region().and_then(region_by_code).map(|r| r.label);
    println!("region: {}", label.unwrap_or("any"));

    // Dates: pick Jan 5..Jan 10, then restart on Jan 3 and finish on Jan 12.
    {
        let mut panel = filters.date_panel(month, settings.week_start);
        let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).ok_or("invalid demo day");
        panel.click(day(5)?);
        panel.click(day(10)?);
        panel.click(day(3)?);
        print_grid(&panel.calendar().month_title(), &panel.calendar().grid());
        if let Some(range) = panel.click(day(12)?) {
            println!("selected {} .. {}", range.start(), range.end());
        }
        print_grid(&panel.calendar().month_title(), &panel.calendar().grid());
        panel.apply();
    }

    // Place search: "Lon" resolves slowly, "Lond" quickly.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let selected = runtime.block_on(async {
        let slow: Arc<dyn LocationProvider> = Arc::new(Delayed {
            inner: gazetteer(),
            delay: Duration::from_millis(120),
        });
        let fast: Arc<dyn LocationProvider> = Arc::new(Delayed {
            inner: gazetteer(),
            delay: Duration::from_millis(10),
        });

        let mut picked: Option<Place> = None;
        let mut search =
            SuggestionSearch::with_config(settings.suggest, |place| picked = Some(place));
        let (tx, mut rx) = mpsc::unbounded_channel();

        for (text, provider) in [("Lo", &fast), ("Lon", &slow), ("Lond", &fast)] {
            let Some(request) = search.on_query_change(text) else {
                println!("{text:?}: too short, no lookup");
                continue;
            };
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(request.run(provider.as_ref()).await);
            });
        }
        drop(tx);

        while let Some(response) = rx.recv().await {
            match search.on_lookup_complete(response) {
                LookupOutcome::Applied(n) => println!("{n} suggestions for {:?}", search.query()),
                LookupOutcome::Stale => println!("dropped a stale response"),
                LookupOutcome::Failed => println!("lookup failed"),
            }
        }
        for (i, place) in search.suggestions().iter().enumerate() {
            println!("  {}. {}", i + 1, place.name);
        }

        search.on_outside_interaction();
        search.on_focus();
        search.select_index(1);
        drop(search);
        picked
    });

    if let Some(place) = selected {
        println!("place: {}", place.name);
        filters.select_place(place);
    }

    let query = filters.query(&settings.listing);
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}
