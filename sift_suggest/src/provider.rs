// Copyright 2025 the Sift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The location lookup seam.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use async_trait::async_trait;
use thiserror::Error;

use crate::LocationRecord;

/// Why a lookup produced no records.
///
/// [`SuggestionSearch`](crate::SuggestionSearch) swallows these; they exist so
/// providers can report something useful to logs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The provider could not be reached.
    #[error("location provider unavailable: {0}")]
    Unavailable(String),
    /// The provider answered with an error.
    #[error("location provider rejected the lookup ({status}): {message}")]
    Rejected {
        /// Provider status code.
        status: u16,
        /// Provider message.
        message: String,
    },
    /// The provider answered with something that is not a list of records.
    #[error("malformed location response: {0}")]
    Malformed(String),
}

/// A source of ranked location records for free-text queries.
///
/// Implementations own their transport and credentials. Lookups are read-only, so
/// retrying one is always safe.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns at most `limit` records for `query`, best match first.
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<LocationRecord>, LookupError>;
}

/// An in-memory provider over a fixed list of records.
///
/// Matches are case-insensitive substrings of the place name, in list order.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    records: Vec<LocationRecord>,
}

impl StaticProvider {
    /// Creates a provider over `records`.
    #[must_use]
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl LocationProvider for StaticProvider {
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<LocationRecord>, LookupError> {
        let needle = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.place_name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }
}
