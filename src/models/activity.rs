// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged fitness activity.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{not_blank, ObjectId, Resource};
use crate::time_utils::{format_utc_rfc3339, parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Email of the user who logged it (not a reference)
    pub user_email: String,
    /// Running, Cycling, Yoga, ...
    pub activity_type: String,
    /// Minutes
    pub duration: i32,
    pub calories_burned: i32,
    /// When the activity happened
    pub date: DateTime<Utc>,
    pub notes: String,
}

fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    match parse_timestamp(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("datetime").with_message(Cow::Borrowed(
            "Datetime has wrong format. Use ISO 8601, e.g. 2024-01-15T10:00:00Z.",
        ))),
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ActivityPayload {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Must be at most 254 characters.")
    )]
    pub user_email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 50, message = "Must be at most 50 characters.")
    )]
    pub activity_type: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub duration: Option<i32>,
    #[validate(required(message = "This field is required."))]
    pub calories_burned: Option<i32>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_timestamp")
    )]
    pub date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: String,
    pub activity_type: String,
    pub duration: i32,
    pub calories_burned: i32,
    pub date: String,
    pub notes: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id.to_hex(),
            user_email: activity.user_email,
            activity_type: activity.activity_type,
            duration: activity.duration,
            calories_burned: activity.calories_burned,
            date: format_utc_rfc3339(activity.date),
            notes: activity.notes,
        }
    }
}

impl Resource for Activity {
    const COLLECTION: &'static str = collections::ACTIVITIES;
    const ROUTE: &'static str = "activities";
    const NAME: &'static str = "activity";

    type Payload = ActivityPayload;
    type Response = ActivityResponse;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn from_payload(
        id: ObjectId,
        payload: ActivityPayload,
        _existing: Option<&Self>,
    ) -> Result<Self, AppError> {
        let date = payload
            .date
            .as_deref()
            .and_then(parse_timestamp)
            .ok_or_else(|| AppError::invalid_field("date", "Datetime has wrong format."))?;

        Ok(Self {
            id,
            user_email: payload.user_email.unwrap_or_default(),
            activity_type: payload.activity_type.unwrap_or_default(),
            duration: payload.duration.unwrap_or_default(),
            calories_burned: payload.calories_burned.unwrap_or_default(),
            date,
            notes: payload.notes.unwrap_or_default(),
        })
    }
}
