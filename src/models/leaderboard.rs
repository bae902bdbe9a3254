// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team leaderboard entries.
//!
//! Entries are a snapshot written by the seed program (see
//! `services::seed::compute_standings`); the API stores what it is given
//! and never recomputes totals or ranks.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{not_blank, ObjectId, Resource};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Team name label (not a reference)
    pub team_name: String,
    pub total_activities: i32,
    pub total_calories: i32,
    /// Minutes
    pub total_duration: i32,
    /// 1 is first place
    pub rank: i32,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LeaderboardPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Must be at most 100 characters.")
    )]
    pub team_name: Option<String>,
    pub total_activities: Option<i32>,
    pub total_calories: Option<i32>,
    pub total_duration: Option<i32>,
    pub rank: Option<i32>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub team_name: String,
    pub total_activities: i32,
    pub total_calories: i32,
    pub total_duration: i32,
    pub rank: i32,
    pub updated_at: String,
}

impl From<LeaderboardEntry> for LeaderboardResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id.to_hex(),
            team_name: entry.team_name,
            total_activities: entry.total_activities,
            total_calories: entry.total_calories,
            total_duration: entry.total_duration,
            rank: entry.rank,
            updated_at: format_utc_rfc3339(entry.updated_at),
        }
    }
}

impl Resource for LeaderboardEntry {
    const COLLECTION: &'static str = collections::LEADERBOARD;
    const ROUTE: &'static str = "leaderboard";
    const NAME: &'static str = "leaderboard entry";

    type Payload = LeaderboardPayload;
    type Response = LeaderboardResponse;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn from_payload(
        id: ObjectId,
        payload: LeaderboardPayload,
        _existing: Option<&Self>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            team_name: payload.team_name.unwrap_or_default(),
            total_activities: payload.total_activities.unwrap_or(0),
            total_calories: payload.total_calories.unwrap_or(0),
            total_duration: payload.total_duration.unwrap_or(0),
            rank: payload.rank.unwrap_or(0),
            updated_at: Utc::now(),
        })
    }

    /// Highest calorie total first.
    fn sort_listing(records: &mut [Self]) {
        records.sort_by(|a, b| b.total_calories.cmp(&a.total_calories));
    }
}
