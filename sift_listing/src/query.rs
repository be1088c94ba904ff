// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variables handed to the listing retrieval.

use serde::Serialize;

/// Proximity constraint around a selected place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    /// `"latitude,longitude"` of the center.
    pub distance_from: String,
    /// Radius, for example `"50mi"`.
    pub distance: String,
}

/// Query variables for one page of listings.
///
/// Serializes to the camel-cased variable names the retrieval layer expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Results per page.
    pub per_page: u32,
    /// One-based page number.
    pub page: u32,
    /// Region filter, when one is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Lower bound on start time, in epoch seconds.
    pub after_date: i64,
    /// Upper bound on start time, in epoch seconds.
    pub before_date: i64,
    /// Only featured listings.
    pub featured: bool,
    /// Proximity filter, when a place is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,
}
