// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identifier resolution: external id string to stored record.
//!
//! A string that is not a well-formed id is indistinguishable from an id
//! that matches nothing; both resolve to `NotFound`.

use crate::db::DocumentStore;
use crate::error::AppError;
use crate::models::{ObjectId, Resource};

/// Parse an id as received in a URL path segment.
pub fn parse_id(raw: &str) -> Option<ObjectId> {
    raw.parse().ok()
}

/// Look up a record by its external id string.
pub async fn resolve<R: Resource>(store: &DocumentStore, raw_id: &str) -> Result<R, AppError> {
    let found = match parse_id(raw_id) {
        Some(id) => store.get::<R>(R::COLLECTION, &id).await?,
        None => {
            tracing::debug!(collection = R::COLLECTION, id = raw_id, "Malformed id");
            None
        }
    };

    found.ok_or_else(|| AppError::NotFound(format!("Object with id '{}' not found.", raw_id)))
}
