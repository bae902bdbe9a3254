// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend-agnostic document store handle.

use crate::config::StoreUrl;
use crate::db::firestore::FirestoreBackend;
use crate::db::memory::MemoryBackend;
use crate::error::AppError;
use crate::models::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Handle to the document collections. Cheap to clone.
/// Result of a write guarded by unique fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Stored,
    /// Another document already holds this field's value.
    Conflict(&'static str),
}

#[derive(Clone)]
pub struct DocumentStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreBackend),
    Memory(MemoryBackend),
}

impl DocumentStore {
    /// Connect to the store named by the configuration.
    pub async fn connect(url: &StoreUrl) -> Result<Self, AppError> {
        let backend = match url {
            StoreUrl::Memory => {
                tracing::warn!("Using in-memory document store; data is not persisted");
                Backend::Memory(MemoryBackend::default())
            }
            StoreUrl::Firestore { project_id } => {
                Backend::Firestore(FirestoreBackend::connect(project_id).await?)
            }
        };
        Ok(Self { backend })
    }

    /// Create an empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryBackend::default()),
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, Backend::Firestore(_))
    }

    /// All documents of a collection in store-native order.
    pub async fn list<T>(&self, collection: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        match &self.backend {
            Backend::Firestore(db) => db.list(collection).await,
            Backend::Memory(db) => db.list(collection),
        }
    }

    /// Fetch one document by id.
    pub async fn get<T>(&self, collection: &str, id: &ObjectId) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        match &self.backend {
            Backend::Firestore(db) => db.get(collection, id).await,
            Backend::Memory(db) => db.get(collection, id),
        }
    }

    /// Create or overwrite the document with this id, unless another
    /// document already holds one of the `unique` field values.
    ///
    /// `previous` lists the unique values the document held before this
    /// write; values no longer held are released.
    pub async fn put_unique<T>(
        &self,
        collection: &str,
        id: &ObjectId,
        doc: &T,
        unique: &[(&'static str, String)],
        previous: &[(&'static str, String)],
    ) -> Result<PutOutcome, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        match &self.backend {
            Backend::Firestore(db) => db.put_unique(collection, id, doc, unique, previous).await,
            Backend::Memory(db) => db.put_unique(collection, id, doc, unique),
        }
    }

    /// Delete a document and release the unique values it held.
    pub async fn delete(
        &self,
        collection: &str,
        id: &ObjectId,
        unique: &[(&'static str, String)],
    ) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.delete(collection, id, unique).await,
            Backend::Memory(db) => {
                db.delete(collection, id);
                Ok(())
            }
        }
    }

    /// Remove every document in a collection, returning how many were removed.
    pub async fn clear(&self, collection: &str) -> Result<usize, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.clear(collection).await,
            Backend::Memory(db) => Ok(db.clear(collection)),
        }
    }
}
