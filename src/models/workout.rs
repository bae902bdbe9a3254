// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout catalog entries.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{not_blank, ObjectId, Resource};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

fn not_a_choice(value: &str) -> String {
    format!("\"{}\" is not a valid choice.", value)
}

fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    match value.parse::<Difficulty>() {
        Ok(_) => Ok(()),
        Err(()) => Err(ValidationError::new("invalid_choice")
            .with_message(Cow::Owned(not_a_choice(value)))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub activity_type: String,
    pub difficulty: Difficulty,
    /// Minutes
    pub duration: i32,
    pub calories_estimate: i32,
    /// Free text, typically numbered steps
    pub instructions: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct WorkoutPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Must be at most 100 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 50, message = "Must be at most 50 characters.")
    )]
    pub activity_type: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_difficulty")
    )]
    pub difficulty: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub duration: Option<i32>,
    #[validate(required(message = "This field is required."))]
    pub calories_estimate: Option<i32>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub activity_type: String,
    pub difficulty: Difficulty,
    pub duration: i32,
    pub calories_estimate: i32,
    pub instructions: String,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.to_hex(),
            name: workout.name,
            description: workout.description,
            activity_type: workout.activity_type,
            difficulty: workout.difficulty,
            duration: workout.duration,
            calories_estimate: workout.calories_estimate,
            instructions: workout.instructions,
        }
    }
}

impl Resource for Workout {
    const COLLECTION: &'static str = collections::WORKOUTS;
    const ROUTE: &'static str = "workouts";
    const NAME: &'static str = "workout";

    type Payload = WorkoutPayload;
    type Response = WorkoutResponse;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn from_payload(
        id: ObjectId,
        payload: WorkoutPayload,
        _existing: Option<&Self>,
    ) -> Result<Self, AppError> {
        let raw = payload.difficulty.unwrap_or_default();
        let difficulty = raw
            .parse()
            .map_err(|()| AppError::invalid_field("difficulty", not_a_choice(&raw)))?;

        Ok(Self {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            activity_type: payload.activity_type.unwrap_or_default(),
            difficulty,
            duration: payload.duration.unwrap_or_default(),
            calories_estimate: payload.calories_estimate.unwrap_or_default(),
            instructions: payload.instructions.unwrap_or_default(),
        })
    }
}
