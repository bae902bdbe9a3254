// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Tracker: fitness tracking REST backend
//!
//! Users, teams, activities, a team leaderboard and a workout catalog,
//! each stored as a document collection and served as a CRUD API.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use models::Resource;
use services::ResourceAccessor;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
}

impl AppState {
    /// Accessor for one resource collection.
    pub fn accessor<R: Resource>(&self) -> ResourceAccessor<R> {
        ResourceAccessor::new(self.store.clone())
    }
}
