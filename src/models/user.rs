// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{not_blank, ObjectId, Resource};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// User profile stored in Firestore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Document ID
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// Unique across users
    pub email: String,
    /// Team name label (not a reference)
    pub team: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied user fields.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Must be at most 100 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Must be at most 254 characters.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 100, message = "Must be at most 100 characters.")
    )]
    pub team: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub team: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            team: user.team,
            created_at: format_utc_rfc3339(user.created_at),
        }
    }
}

impl Resource for User {
    const COLLECTION: &'static str = collections::USERS;
    const ROUTE: &'static str = "users";
    const NAME: &'static str = "user";

    type Payload = UserPayload;
    type Response = UserResponse;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn from_payload(
        id: ObjectId,
        payload: UserPayload,
        existing: Option<&Self>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            team: payload.team.unwrap_or_default(),
            created_at: existing.map_or_else(Utc::now, |u| u.created_at),
        })
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("email", self.email.clone())]
    }
}
