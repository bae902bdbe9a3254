// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team model.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{not_blank, ObjectId, Resource};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A team. Membership is tracked by users' `team` label; `members_count`
/// is maintained by whoever writes the team, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Unique across teams
    pub name: String,
    pub description: String,
    pub members_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct TeamPayload {
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
    pub members_count: Option<i32>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TeamResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub members_count: i32,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.to_hex(),
            name: team.name,
            description: team.description,
            created_at: format_utc_rfc3339(team.created_at),
            members_count: team.members_count,
        }
    }
}

impl Resource for Team {
    const COLLECTION: &'static str = collections::TEAMS;
    const ROUTE: &'static str = "teams";
    const NAME: &'static str = "team";

    type Payload = TeamPayload;
    type Response = TeamResponse;

    fn id(&self) -> ObjectId {
        self.id
    }

    fn from_payload(
        id: ObjectId,
        payload: TeamPayload,
        existing: Option<&Self>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            members_count: payload.members_count.unwrap_or(0),
            created_at: existing.map_or_else(Utc::now, |t| t.created_at),
        })
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_count_defaults_to_zero() {
        let payload: TeamPayload = serde_json::from_value(serde_json::json!({
            "name": "Team DC",
            "description": "Justice League!"
        }))
        .unwrap();
        payload.validate().unwrap();

        let team = Team::from_payload(ObjectId::new(), payload, None).unwrap();
        assert_eq!(team.members_count, 0);
    }

    #[test]
    fn test_blank_description_rejected() {
        let payload = TeamPayload {
            name: Some("Team DC".to_string()),
            description: Some(String::new()),
            members_count: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }
}
