// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for local development and tests.
//!
//! Documents are kept as JSON values so they go through the same serde path
//! as Firestore documents. Each collection is ordered by id, which for ids
//! minted by this process is creation order.

use crate::db::PutOutcome;
use crate::error::AppError;
use crate::models::ObjectId;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

type Collection = BTreeMap<ObjectId, Value>;

#[derive(Clone, Default)]
pub struct MemoryBackend {
    collections: Arc<DashMap<String, Collection>>,
}

fn decode<T: DeserializeOwned>(collection: &str, doc: &Value) -> Result<T, AppError> {
    T::deserialize(doc)
        .map_err(|e| AppError::Database(format!("Corrupt document in {}: {}", collection, e)))
}

impl MemoryBackend {
    pub fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, AppError> {
        match self.collections.get(collection) {
            Some(docs) => docs.values().map(|doc| decode(collection, doc)).collect(),
            None => Ok(Vec::new()),
        }
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &ObjectId,
    ) -> Result<Option<T>, AppError> {
        self.collections
            .get(collection)
            .and_then(|docs| docs.get(id).map(|doc| decode(collection, doc)))
            .transpose()
    }

    /// Store `doc` unless another document already holds one of the
    /// `unique` field values. The check and the insert happen under the
    /// collection's lock.
    pub fn put_unique<T: Serialize>(
        &self,
        collection: &str,
        id: &ObjectId,
        doc: &T,
        unique: &[(&'static str, String)],
    ) -> Result<PutOutcome, AppError> {
        let value = serde_json::to_value(doc)
            .map_err(|e| AppError::Database(format!("Failed to encode document: {}", e)))?;

        let mut docs = self.collections.entry(collection.to_string()).or_default();
        for (field, wanted) in unique {
            let taken = docs.iter().any(|(other, doc)| {
                other != id && doc.get(*field).and_then(Value::as_str) == Some(wanted.as_str())
            });
            if taken {
                return Ok(PutOutcome::Conflict(*field));
            }
        }
        docs.insert(*id, value);
        Ok(PutOutcome::Stored)
    }

    pub fn delete(&self, collection: &str, id: &ObjectId) {
        if let Some(mut docs) = self.collections.get_mut(collection) {
            docs.remove(id);
        }
    }

    pub fn clear(&self, collection: &str) -> usize {
        self.collections
            .remove(collection)
            .map(|(_, docs)| docs.len())
            .unwrap_or(0)
    }
}
