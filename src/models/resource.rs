// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The contract every API resource implements.

use crate::error::AppError;
use crate::models::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Required text must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

/// A document type exposed as a CRUD collection under `/api/<ROUTE>/`.
///
/// The implementing type is the stored document. `Payload` is what clients
/// send on create/update and `Response` is the wire representation.
/// Stored field names match payload field names so a stored record can be
/// re-read as a payload when merging partial updates.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Physical collection name in the document store.
    const COLLECTION: &'static str;
    /// Path segment under `/api/`.
    const ROUTE: &'static str;
    /// Singular, human-readable name used in messages.
    const NAME: &'static str;

    type Payload: DeserializeOwned + Validate + Send;
    type Response: Serialize + From<Self> + Send;

    fn id(&self) -> ObjectId;

    /// Build the record to store from a validated payload.
    ///
    /// `existing` is the stored record when updating; fields the client
    /// cannot set (creation timestamps) are carried over from it.
    fn from_payload(
        id: ObjectId,
        payload: Self::Payload,
        existing: Option<&Self>,
    ) -> Result<Self, AppError>;

    /// Fields that must be unique across the collection, with their values.
    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Default ordering applied to list results.
    fn sort_listing(_records: &mut [Self]) {}
}
