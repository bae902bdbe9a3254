// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore backend tests. Run against the emulator:
//!
//! ```sh
//! FIRESTORE_EMULATOR_HOST=localhost:8080 cargo test --test firestore_integration
//! ```

use octofit_tracker::error::AppError;
use octofit_tracker::models::{User, UserPayload};
use octofit_tracker::services::ResourceAccessor;
use serde_json::json;

mod common;
use common::{test_firestore, unique_suffix};

fn user_payload(suffix: u128, name: &str) -> UserPayload {
    UserPayload {
        name: Some(name.to_string()),
        email: Some(format!("{}.{suffix}@marvel.com", name.to_lowercase())),
        team: Some("Team Marvel".to_string()),
    }
}

#[tokio::test]
async fn test_user_crud_cycle() {
    require_emulator!();

    let store = test_firestore().await;
    let users = ResourceAccessor::<User>::new(store);
    let suffix = unique_suffix();

    let created = users.create(user_payload(suffix, "Thor")).await.unwrap();
    let id = created.id.to_hex();

    let fetched = users.retrieve(&id).await.unwrap();
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.created_at, created.created_at);

    let patched = users
        .partial_update(&id, json!({"team": "Team DC"}))
        .await
        .unwrap();
    assert_eq!(patched.team, "Team DC");
    assert_eq!(patched.name, "Thor");

    assert!(users.list().await.unwrap().iter().any(|u| u.id == created.id));

    users.delete(&id).await.unwrap();
    assert!(matches!(
        users.retrieve(&id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    require_emulator!();

    let store = test_firestore().await;
    let users = ResourceAccessor::<User>::new(store);
    let suffix = unique_suffix();

    let first = users.create(user_payload(suffix, "Hulk")).await.unwrap();
    let err = users
        .create(user_payload(suffix, "Hulk"))
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains_key("email"));

    users.delete(&first.id.to_hex()).await.unwrap();
}

#[tokio::test]
async fn test_malformed_id_not_found() {
    require_emulator!();

    let store = test_firestore().await;
    let users = ResourceAccessor::<User>::new(store);

    assert!(matches!(
        users.retrieve("not-a-valid-id-format").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        users.delete("65a1b2c3d4e5f60718293a4b").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_concurrent_duplicate_emails_store_one() {
    require_emulator!();

    let store = test_firestore().await;
    let suffix = unique_suffix();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let users = ResourceAccessor::<User>::new(store.clone());
        handles.push(tokio::spawn(async move {
            users.create(user_payload(suffix, "Flash")).await
        }));
    }

    let mut created = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(user) => created.push(user),
            Err(err) => assert!(err.field_errors().unwrap().contains_key("email")),
        }
    }
    assert_eq!(created.len(), 1);

    let users = ResourceAccessor::<User>::new(store);
    users.delete(&created[0].id.to_hex()).await.unwrap();
    // The email is free again once its owner is gone.
    let again = users.create(user_payload(suffix, "Flash")).await.unwrap();
    users.delete(&again.id.to_hex()).await.unwrap();
}
