// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore backend for the document store.
//!
//! Each resource lives in its own top-level collection and each document is
//! keyed by the hex form of its `ObjectId`, which is also stored in the
//! document body as `_id`.
//!
//! Unique field values are claimed with create-only marker documents in a
//! companion `<collection>_unique` collection, keyed by field and value and
//! naming the owning document.

use crate::db::PutOutcome;
use crate::error::AppError;
use crate::models::ObjectId;
use firestore::errors::FirestoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Just enough of a stored document to delete it.
#[derive(Deserialize)]
struct DocumentKey {
    #[serde(alias = "_firestore_id")]
    doc_id: Option<String>,
}

/// Claim on one unique field value.
#[derive(Debug, Serialize, Deserialize)]
struct UniqueMarker {
    owner: ObjectId,
}

enum Claim {
    New,
    AlreadyOwned,
    Taken,
}

fn marker_collection(collection: &str) -> String {
    format!("{}_unique", collection)
}

// Values are hex-encoded so any string is a valid document id.
fn marker_id(field: &str, value: &str) -> String {
    format!("{}_{}", field, hex::encode(value))
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreBackend {
    client: firestore::FirestoreDb,
}

impl FirestoreBackend {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn connect_emulator(project_id: &str) -> Result<Self, AppError> {
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    pub async fn list<T>(&self, collection: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.client
            .fluent()
            .select()
            .from(collection)
            .order_by([("_id", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    pub async fn get<T>(&self, collection: &str, id: &ObjectId) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.client
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(&id.to_hex())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or overwrite a document.
    async fn put<T>(&self, collection: &str, id: &ObjectId, doc: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id.to_hex())
            .object(doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

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
        let mut claimed: Vec<(&'static str, String)> = Vec::new();
        for (field, value) in unique {
            let outcome = self.claim(collection, field, value, id).await;
            match outcome {
                Ok(Claim::New) => claimed.push((*field, value.clone())),
                Ok(Claim::AlreadyOwned) => {}
                Ok(Claim::Taken) => {
                    self.release_all(collection, &claimed).await;
                    return Ok(PutOutcome::Conflict(*field));
                }
                Err(e) => {
                    self.release_all(collection, &claimed).await;
                    return Err(e);
                }
            }
        }

        if let Err(e) = self.put(collection, id, doc).await {
            self.release_all(collection, &claimed).await;
            return Err(e);
        }

        let stale: Vec<(&'static str, String)> = previous
            .iter()
            .filter(|held| !unique.contains(*held))
            .cloned()
            .collect();
        self.release_all(collection, &stale).await;

        Ok(PutOutcome::Stored)
    }

    /// Create the marker for a unique value, or report who holds it.
    async fn claim(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        owner: &ObjectId,
    ) -> Result<Claim, AppError> {
        let markers = marker_collection(collection);
        let key = marker_id(field, value);

        let inserted: Result<UniqueMarker, FirestoreError> = self
            .client
            .fluent()
            .insert()
            .into(&markers)
            .document_id(&key)
            .object(&UniqueMarker { owner: *owner })
            .execute()
            .await;

        match inserted {
            Ok(_) => Ok(Claim::New),
            Err(FirestoreError::DataConflictError(_)) => {
                let current: Option<UniqueMarker> = self
                    .client
                    .fluent()
                    .select()
                    .by_id_in(&markers)
                    .obj()
                    .one(&key)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                match current {
                    Some(marker) if marker.owner == *owner => Ok(Claim::AlreadyOwned),
                    _ => Ok(Claim::Taken),
                }
            }
            Err(e) => Err(AppError::Database(format!(
                "Failed to claim {} in {}: {}",
                field, collection, e
            ))),
        }
    }

    /// Best effort: a marker left behind only blocks its value.
    async fn release_all(&self, collection: &str, held: &[(&'static str, String)]) {
        let markers = marker_collection(collection);
        for (field, value) in held {
            if let Err(e) = self
                .client
                .fluent()
                .delete()
                .from(markers.as_str())
                .document_id(marker_id(field, value))
                .execute()
                .await
            {
                tracing::warn!(collection, field, error = %e, "Failed to release unique value");
            }
        }
    }

    pub async fn delete(
        &self,
        collection: &str,
        id: &ObjectId,
        unique: &[(&'static str, String)],
    ) -> Result<(), AppError> {
        self.client
            .fluent()
            .delete()
            .from(collection)
            .document_id(id.to_hex())
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        self.release_all(collection, unique).await;
        Ok(())
    }

    /// Delete every document in a collection and its unique markers.
    ///
    /// Returns the number of documents deleted, not counting markers.
    pub async fn clear(&self, collection: &str) -> Result<usize, AppError> {
        let removed = self.clear_collection(collection).await?;
        self.clear_collection(&marker_collection(collection)).await?;
        Ok(removed)
    }

    /// Delete every document in a collection using batched transactions.
    async fn clear_collection(&self, collection: &str) -> Result<usize, AppError> {
        let keys: Vec<DocumentKey> = self
            .client
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        for chunk in keys.chunks(BATCH_SIZE) {
            let mut transaction = self
                .client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for doc_id in chunk.iter().filter_map(|key| key.doc_id.as_deref()) {
                self.client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(doc_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction.commit().await.map_err(|e| {
                AppError::Database(format!("Failed to commit batch deletion: {}", e))
            })?;
        }

        tracing::debug!(collection, count = keys.len(), "Cleared collection");
        Ok(keys.len())
    }
}
