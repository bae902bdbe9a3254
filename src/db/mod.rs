// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (document store).

pub mod firestore;
pub mod memory;
pub mod store;

pub use store::{DocumentStore, PutOutcome};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";
    pub const ACTIVITIES: &str = "activities";
    pub const LEADERBOARD: &str = "leaderboard";
    pub const WORKOUTS: &str = "workouts";

    /// Every collection the API owns, in seeding order.
    pub const ALL: [&str; 5] = [USERS, TEAMS, ACTIVITIES, LEADERBOARD, WORKOUTS];
}
