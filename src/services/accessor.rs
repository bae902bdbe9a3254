// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic CRUD over one resource collection.

use crate::db::{DocumentStore, PutOutcome};
use crate::error::{AppError, FieldErrors};
use crate::models::{ObjectId, Resource};
use crate::services::resolver::resolve;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use validator::Validate;

/// Decode a request body into a payload type.
///
/// Leading and trailing whitespace is stripped from string values before
/// decoding, so a blank string reaches validation as empty. `null` is not
/// accepted for any field. Type mismatches (a string where a number belongs,
/// out-of-range integers) are reported as validation errors; a body that is
/// not a JSON object is a bad request.
pub fn parse_payload<P: DeserializeOwned>(body: Value) -> Result<P, AppError> {
    let Value::Object(mut fields) = body else {
        return Err(AppError::BadRequest(
            "Expected a JSON object in the request body".to_string(),
        ));
    };

    let mut nulls = FieldErrors::new();
    for (name, value) in fields.iter_mut() {
        match value {
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.len() != text.len() {
                    *text = trimmed.to_string();
                }
            }
            Value::Null => {
                nulls.insert(name.clone(), vec!["This field may not be null.".to_string()]);
            }
            _ => {}
        }
    }
    if !nulls.is_empty() {
        return Err(AppError::Validation(nulls));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::invalid_field("non_field_errors", e.to_string()))
}

/// List/create/retrieve/update/delete for resource type `R`.
pub struct ResourceAccessor<R> {
    store: DocumentStore,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceAccessor<R> {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    /// All records, in the resource's listing order.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        let mut records: Vec<R> = self.store.list(R::COLLECTION).await?;
        R::sort_listing(&mut records);
        Ok(records)
    }

    pub async fn create(&self, payload: R::Payload) -> Result<R, AppError> {
        let record = self.save(ObjectId::new(), payload, None).await?;
        tracing::info!(collection = R::COLLECTION, id = %record.id(), "Created document");
        Ok(record)
    }

    pub async fn retrieve(&self, id: &str) -> Result<R, AppError> {
        resolve(&self.store, id).await
    }

    /// Replace every client-settable field.
    pub async fn update(&self, id: &str, payload: R::Payload) -> Result<R, AppError> {
        let existing: R = resolve(&self.store, id).await?;
        self.replace(existing, payload).await
    }

    /// Replace every client-settable field of a record already resolved.
    pub async fn replace(&self, existing: R, payload: R::Payload) -> Result<R, AppError> {
        let record = self.save(existing.id(), payload, Some(&existing)).await?;
        tracing::info!(collection = R::COLLECTION, id = %record.id(), "Updated document");
        Ok(record)
    }

    /// Overlay the given fields on the stored record; others are kept.
    pub async fn partial_update(&self, id: &str, fields: Value) -> Result<R, AppError> {
        let existing: R = resolve(&self.store, id).await?;

        let Value::Object(fields) = fields else {
            return Err(AppError::BadRequest(
                "Expected a JSON object in the request body".to_string(),
            ));
        };
        let mut merged = serde_json::to_value(&existing)
            .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
        if let Value::Object(base) = &mut merged {
            base.extend(fields);
        }

        let payload = parse_payload(merged)?;
        let record = self.save(existing.id(), payload, Some(&existing)).await?;
        tracing::info!(collection = R::COLLECTION, id = %record.id(), "Patched document");
        Ok(record)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let existing: R = resolve(&self.store, id).await?;
        self.store
            .delete(R::COLLECTION, &existing.id(), &existing.unique_fields())
            .await?;
        tracing::info!(collection = R::COLLECTION, id = %existing.id(), "Deleted document");
        Ok(())
    }

    async fn save(
        &self,
        id: ObjectId,
        payload: R::Payload,
        existing: Option<&R>,
    ) -> Result<R, AppError> {
        payload.validate()?;
        let record = R::from_payload(id, payload, existing)?;
        let previous = existing.map(R::unique_fields).unwrap_or_default();

        let outcome = self
            .store
            .put_unique(R::COLLECTION, &id, &record, &record.unique_fields(), &previous)
            .await?;
        match outcome {
            PutOutcome::Stored => Ok(record),
            PutOutcome::Conflict(field) => {
                tracing::debug!(collection = R::COLLECTION, field, "Uniqueness violation");
                Err(AppError::invalid_field(
                    field,
                    format!("{} with this {} already exists.", R::NAME, field),
                ))
            }
        }
    }
}

impl<R> Clone for ResourceAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _resource: PhantomData,
        }
    }
}
