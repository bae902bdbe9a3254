// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Populate the document store with demo data.
//!
//! Destroys whatever is in the five API collections first. Set
//! `SEED_RNG=<u64>` to reproduce a previous run's activities.

use anyhow::Context;
use octofit_tracker::{
    config::Config, db::DocumentStore, logging::init_logging, services::populate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    let store = DocumentStore::connect(&config.store_url)
        .await
        .context("connecting to document store")?;
    if !store.is_persistent() {
        tracing::warn!("DATABASE_URL is memory://; seeded data will be discarded on exit");
    }

    let seed = match std::env::var("SEED_RNG") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SEED_RNG is not a u64: {raw:?}"))?,
        Err(_) => rand::random(),
    };
    tracing::info!(seed, "Starting database population");
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = populate(&store, &mut rng).await?;

    println!("=== Database Population Complete ===");
    println!("Teams created: {}", summary.teams);
    println!("Users created: {}", summary.users);
    println!("Activities created: {}", summary.activities);
    println!("Leaderboard entries: {}", summary.leaderboard);
    println!("Workouts created: {}", summary.workouts);
    for standing in &summary.standings {
        println!(
            "#{} {}: {} total calories",
            standing.rank, standing.team_name, standing.total_calories
        );
    }
    Ok(())
}
