// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API root listing the collection endpoints.

use crate::models::{Activity, LeaderboardEntry, Resource, Team, User, Workout};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Absolute address of each collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ApiIndex {
    pub users: String,
    pub teams: String,
    pub activities: String,
    pub leaderboard: String,
    pub workouts: String,
}

impl ApiIndex {
    pub fn new(base_url: &str) -> Self {
        Self {
            users: collection_url::<User>(base_url),
            teams: collection_url::<Team>(base_url),
            activities: collection_url::<Activity>(base_url),
            leaderboard: collection_url::<LeaderboardEntry>(base_url),
            workouts: collection_url::<Workout>(base_url),
        }
    }
}

/// `<base>/api/<route>/` for a resource type.
pub fn collection_url<R: Resource>(base_url: &str) -> String {
    format!("{}/api/{}/", base_url.trim_end_matches('/'), R::ROUTE)
}

async fn api_root(State(state): State<Arc<AppState>>) -> Json<ApiIndex> {
    Json(ApiIndex::new(&state.config.api_base_url))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api_root))
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
}
