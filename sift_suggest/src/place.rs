// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Location records from a provider and the normalized [`Place`].

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// A normalized location suggestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned identifier.
    pub id: String,
    /// Display name, also written back into the query on selection.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Point geometry of a [`LocationRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    /// `[longitude, latitude]`, in GeoJSON order.
    pub coordinates: [f64; 2],
}

/// A raw location record as returned by a geocoding provider.
///
/// The shape follows a GeoJSON feature, so a provider can deserialize its response
/// body straight into these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Provider-assigned identifier.
    pub id: String,
    /// Full display name.
    pub place_name: String,
    /// Location of the feature.
    pub geometry: PointGeometry,
}

impl LocationRecord {
    /// Creates a record from its parts.
    pub fn new(
        id: impl Into<String>,
        place_name: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            place_name: place_name.into(),
            geometry: PointGeometry {
                coordinates: [longitude, latitude],
            },
        }
    }
}

impl From<LocationRecord> for Place {
    fn from(record: LocationRecord) -> Self {
        let [longitude, latitude] = record.geometry.coordinates;
        Self {
            id: record.id,
            name: record.place_name,
            latitude,
            longitude,
        }
    }
}
