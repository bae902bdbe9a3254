// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod leaderboard;
pub mod object_id;
pub mod resource;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::{Activity, ActivityPayload, ActivityResponse};
pub use leaderboard::{LeaderboardEntry, LeaderboardPayload, LeaderboardResponse};
pub use object_id::{InvalidObjectId, ObjectId};
pub use resource::{not_blank, Resource};
pub use team::{Team, TeamPayload, TeamResponse};
pub use user::{User, UserPayload, UserResponse};
pub use workout::{Difficulty, Workout, WorkoutPayload, WorkoutResponse};
