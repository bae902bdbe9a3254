// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CRUD endpoints, generic over the resource type.

use crate::error::{AppError, Result};
use crate::models::Resource;
use crate::services::parse_payload;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Collection and item routes for `R`, served with and without a trailing
/// slash.
pub fn routes<R: Resource>() -> Router<Arc<AppState>> {
    let collection = format!("/api/{}", R::ROUTE);
    let item = format!("/api/{}/{{id}}", R::ROUTE);

    Router::new()
        .route(&collection, collection_methods::<R>())
        .route(&format!("{}/", collection), collection_methods::<R>())
        .route(&item, item_methods::<R>())
        .route(&format!("{}/", item), item_methods::<R>())
}

fn collection_methods<R: Resource>() -> MethodRouter<Arc<AppState>> {
    get(list::<R>).post(create::<R>)
}

fn item_methods<R: Resource>() -> MethodRouter<Arc<AppState>> {
    get(retrieve::<R>)
        .put(update::<R>)
        .patch(partial_update::<R>)
        .delete(destroy::<R>)
}

fn json_body(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

async fn list<R: Resource>(State(state): State<Arc<AppState>>) -> Result<Json<Vec<R::Response>>> {
    let records = state.accessor::<R>().list().await?;
    tracing::debug!(collection = R::COLLECTION, count = records.len(), "Listing");
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn create<R: Resource>(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Response>)> {
    let payload = parse_payload(json_body(body)?)?;
    let record = state.accessor::<R>().create(payload).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

async fn retrieve<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<R::Response>> {
    let record = state.accessor::<R>().retrieve(&id).await?;
    Ok(Json(record.into()))
}

async fn update<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<R::Response>> {
    let accessor = state.accessor::<R>();
    // Unknown ids are reported before body problems.
    let existing = accessor.retrieve(&id).await?;
    let payload = parse_payload(json_body(body)?)?;
    let record = accessor.replace(existing, payload).await?;
    Ok(Json(record.into()))
}

async fn partial_update<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<R::Response>> {
    let record = state
        .accessor::<R>()
        .partial_update(&id, json_body(body)?)
        .await?;
    Ok(Json(record.into()))
}

async fn destroy<R: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.accessor::<R>().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
