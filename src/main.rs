// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Tracker API Server

use octofit_tracker::{config::Config, db::DocumentStore, logging::init_logging, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        api_base_url = %config.api_base_url,
        "Starting OctoFit Tracker API"
    );

    let store = DocumentStore::connect(&config.store_url).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    let app = octofit_tracker::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
