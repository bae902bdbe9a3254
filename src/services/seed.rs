// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Demo data for the `populate_db` binary.
//!
//! Wipes every collection, then writes two superhero teams, their members,
//! a few weeks of random activities, a leaderboard snapshot computed from
//! those activities, and the workout catalog.

use crate::db::{collections, DocumentStore};
use crate::error::AppError;
use crate::models::{
    Activity, ActivityPayload, Difficulty, LeaderboardEntry, LeaderboardPayload, Team,
    TeamPayload, User, UserPayload, Workout, WorkoutPayload,
};
use crate::services::ResourceAccessor;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::json;
use std::collections::HashMap;

struct TeamSeed {
    name: &'static str,
    description: &'static str,
    /// (name, email)
    heroes: [(&'static str, &'static str); 6],
}

const TEAMS: [TeamSeed; 2] = [
    TeamSeed {
        name: "Team Marvel",
        description: "Avengers assemble! The mightiest heroes united for fitness.",
        heroes: [
            ("Iron Man", "tony.stark@marvel.com"),
            ("Captain America", "steve.rogers@marvel.com"),
            ("Thor", "thor.odinson@marvel.com"),
            ("Black Widow", "natasha.romanoff@marvel.com"),
            ("Hulk", "bruce.banner@marvel.com"),
            ("Spider-Man", "peter.parker@marvel.com"),
        ],
    },
    TeamSeed {
        name: "Team DC",
        description: "Justice League fighting for health and wellness.",
        heroes: [
            ("Batman", "bruce.wayne@dc.com"),
            ("Superman", "clark.kent@dc.com"),
            ("Wonder Woman", "diana.prince@dc.com"),
            ("Flash", "barry.allen@dc.com"),
            ("Aquaman", "arthur.curry@dc.com"),
            ("Green Lantern", "hal.jordan@dc.com"),
        ],
    },
];

pub const ACTIVITY_TYPES: [&str; 7] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weight Training",
    "Yoga",
    "Boxing",
    "CrossFit",
];

struct WorkoutSeed {
    name: &'static str,
    description: &'static str,
    activity_type: &'static str,
    difficulty: Difficulty,
    duration: i32,
    calories_estimate: i32,
    instructions: &'static str,
}

const WORKOUTS: [WorkoutSeed; 6] = [
    WorkoutSeed {
        name: "Superhero Strength Training",
        description: "Build strength like a superhero with compound movements",
        activity_type: "Weight Training",
        difficulty: Difficulty::Intermediate,
        duration: 45,
        calories_estimate: 350,
        instructions: "1. Warm up 5 mins\n2. Bench press 3x10\n3. Squats 3x10\n4. Deadlifts 3x10\n5. Cool down",
    },
    WorkoutSeed {
        name: "Speedster Cardio Blast",
        description: "High-intensity cardio workout to boost speed and endurance",
        activity_type: "Running",
        difficulty: Difficulty::Advanced,
        duration: 30,
        calories_estimate: 400,
        instructions: "1. Warm up jog 5 mins\n2. Sprint intervals 20 mins\n3. Cool down jog 5 mins",
    },
    WorkoutSeed {
        name: "Warrior Yoga Flow",
        description: "Flexibility and balance training for warriors",
        activity_type: "Yoga",
        difficulty: Difficulty::Beginner,
        duration: 30,
        calories_estimate: 150,
        instructions: "1. Sun salutations\n2. Warrior poses\n3. Balance poses\n4. Relaxation",
    },
    WorkoutSeed {
        name: "Hero HIIT Circuit",
        description: "High-intensity interval training for maximum results",
        activity_type: "CrossFit",
        difficulty: Difficulty::Advanced,
        duration: 40,
        calories_estimate: 450,
        instructions: "1. Burpees 1 min\n2. Mountain climbers 1 min\n3. Jump squats 1 min\n4. Rest 30s\n5. Repeat 8 rounds",
    },
    WorkoutSeed {
        name: "Aquatic Power Swim",
        description: "Build endurance with swimming laps",
        activity_type: "Swimming",
        difficulty: Difficulty::Intermediate,
        duration: 45,
        calories_estimate: 380,
        instructions: "1. Warm up 5 mins easy swim\n2. Freestyle laps 20 mins\n3. Backstroke 10 mins\n4. Cool down 10 mins",
    },
    WorkoutSeed {
        name: "Combat Boxing Session",
        description: "Boxing workout for strength and agility",
        activity_type: "Boxing",
        difficulty: Difficulty::Intermediate,
        duration: 50,
        calories_estimate: 420,
        instructions: "1. Jump rope 5 mins\n2. Shadow boxing 10 mins\n3. Heavy bag work 20 mins\n4. Speed bag 10 mins\n5. Cool down",
    },
];

/// Aggregate totals and rank for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub team_name: String,
    pub total_activities: i32,
    pub total_calories: i32,
    pub total_duration: i32,
    /// 1-based, no gaps
    pub rank: i32,
}

/// Record counts after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams: usize,
    pub users: usize,
    pub activities: usize,
    pub leaderboard: usize,
    pub workouts: usize,
    pub standings: Vec<TeamStanding>,
}

/// Random activities for each user: 5 to 10 sessions over the last 30 days.
pub fn plan_activities<G: Rng>(
    users: &[User],
    now: DateTime<Utc>,
    rng: &mut G,
) -> Vec<ActivityPayload> {
    let mut planned = Vec::new();
    for user in users {
        let sessions = rng.random_range(5..=10);
        for _ in 0..sessions {
            let activity_type = ACTIVITY_TYPES[rng.random_range(0..ACTIVITY_TYPES.len())];
            let duration: i32 = rng.random_range(20..=120);
            let calories = (f64::from(duration) * rng.random_range(5.0..12.0)) as i32;
            let days_ago = rng.random_range(0..=30);

            planned.push(ActivityPayload {
                user_email: Some(user.email.clone()),
                activity_type: Some(activity_type.to_string()),
                duration: Some(duration),
                calories_burned: Some(calories),
                date: Some((now - Duration::days(days_ago)).to_rfc3339()),
                notes: Some(format!("{} session by {}", activity_type, user.name)),
            });
        }
    }
    planned
}

/// Per-team totals over the activities of each team's users, ranked by
/// total calories (highest first). Ties keep the order of `teams`.
///
/// Users are matched to teams by their team label and activities to users
/// by email; anything that does not match is left out.
pub fn compute_standings(
    teams: &[Team],
    users: &[User],
    activities: &[Activity],
) -> Vec<TeamStanding> {
    let team_by_email: HashMap<&str, &str> = users
        .iter()
        .map(|u| (u.email.as_str(), u.team.as_str()))
        .collect();

    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| {
            let mut standing = TeamStanding {
                team_name: team.name.clone(),
                total_activities: 0,
                total_calories: 0,
                total_duration: 0,
                rank: 0,
            };
            for activity in activities
                .iter()
                .filter(|a| team_by_email.get(a.user_email.as_str()) == Some(&team.name.as_str()))
            {
                standing.total_activities += 1;
                standing.total_calories += activity.calories_burned;
                standing.total_duration += activity.duration;
            }
            standing
        })
        .collect();

    standings.sort_by(|a, b| b.total_calories.cmp(&a.total_calories));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index as i32 + 1;
    }
    standings
}

/// Clear the store and write the full demo data set.
pub async fn populate<G: Rng>(
    store: &DocumentStore,
    rng: &mut G,
) -> Result<SeedSummary, AppError> {
    tracing::info!("Clearing existing data");
    for collection in collections::ALL {
        let removed = store.clear(collection).await?;
        tracing::debug!(collection, removed, "Collection cleared");
    }

    let team_accessor = ResourceAccessor::<Team>::new(store.clone());
    let user_accessor = ResourceAccessor::<User>::new(store.clone());
    let activity_accessor = ResourceAccessor::<Activity>::new(store.clone());
    let leaderboard_accessor = ResourceAccessor::<LeaderboardEntry>::new(store.clone());
    let workout_accessor = ResourceAccessor::<Workout>::new(store.clone());

    tracing::info!("Creating teams and users");
    let mut teams = Vec::new();
    let mut users = Vec::new();
    for seed in &TEAMS {
        let team = team_accessor
            .create(TeamPayload {
                name: Some(seed.name.to_string()),
                description: Some(seed.description.to_string()),
                members_count: Some(0),
            })
            .await?;

        let mut members = 0;
        for (name, email) in seed.heroes {
            users.push(
                user_accessor
                    .create(UserPayload {
                        name: Some(name.to_string()),
                        email: Some(email.to_string()),
                        team: Some(seed.name.to_string()),
                    })
                    .await?,
            );
            members += 1;
        }

        let team = team_accessor
            .partial_update(&team.id.to_hex(), json!({ "members_count": members }))
            .await?;
        teams.push(team);
    }

    tracing::info!("Creating activities");
    let mut activities = Vec::new();
    for payload in plan_activities(&users, Utc::now(), rng) {
        activities.push(activity_accessor.create(payload).await?);
    }

    tracing::info!("Creating leaderboard entries");
    let standings = compute_standings(&teams, &users, &activities);
    for standing in &standings {
        leaderboard_accessor
            .create(LeaderboardPayload {
                team_name: Some(standing.team_name.clone()),
                total_activities: Some(standing.total_activities),
                total_calories: Some(standing.total_calories),
                total_duration: Some(standing.total_duration),
                rank: Some(standing.rank),
            })
            .await?;
    }

    tracing::info!("Creating workouts");
    for seed in &WORKOUTS {
        workout_accessor
            .create(WorkoutPayload {
                name: Some(seed.name.to_string()),
                description: Some(seed.description.to_string()),
                activity_type: Some(seed.activity_type.to_string()),
                difficulty: Some(seed.difficulty.to_string()),
                duration: Some(seed.duration),
                calories_estimate: Some(seed.calories_estimate),
                instructions: Some(seed.instructions.to_string()),
            })
            .await?;
    }

    let summary = SeedSummary {
        teams: team_accessor.list().await?.len(),
        users: user_accessor.list().await?.len(),
        activities: activity_accessor.list().await?.len(),
        leaderboard: leaderboard_accessor.list().await?.len(),
        workouts: workout_accessor.list().await?.len(),
        standings,
    };

    tracing::info!(
        teams = summary.teams,
        users = summary.users,
        activities = summary.activities,
        leaderboard = summary.leaderboard,
        workouts = summary.workouts,
        "Database population complete"
    );
    for standing in &summary.standings {
        tracing::info!(
            team = %standing.team_name,
            rank = standing.rank,
            total_calories = standing.total_calories,
            "Team standing"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn team(name: &str) -> Team {
        Team {
            id: ObjectId::new(),
            name: name.to_string(),
            description: String::new(),
            members_count: 0,
            created_at: Utc::now(),
        }
    }

    fn user(email: &str, team: &str) -> User {
        User {
            id: ObjectId::new(),
            name: email.to_string(),
            email: email.to_string(),
            team: team.to_string(),
            created_at: Utc::now(),
        }
    }

    fn activity(email: &str, duration: i32, calories: i32) -> Activity {
        Activity {
            id: ObjectId::new(),
            user_email: email.to_string(),
            activity_type: "Running".to_string(),
            duration,
            calories_burned: calories,
            date: Utc::now(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_standings_totals_and_ranks() {
        let teams = [team("Team Marvel"), team("Team DC")];
        let users = [
            user("tony@marvel.com", "Team Marvel"),
            user("bruce@dc.com", "Team DC"),
            user("clark@dc.com", "Team DC"),
        ];
        let activities = [
            activity("tony@marvel.com", 30, 300),
            activity("bruce@dc.com", 60, 500),
            activity("clark@dc.com", 20, 100),
            activity("stranger@nowhere.com", 90, 9000),
        ];

        let standings = compute_standings(&teams, &users, &activities);

        assert_eq!(
            standings,
            vec![
                TeamStanding {
                    team_name: "Team DC".to_string(),
                    total_activities: 2,
                    total_calories: 600,
                    total_duration: 80,
                    rank: 1,
                },
                TeamStanding {
                    team_name: "Team Marvel".to_string(),
                    total_activities: 1,
                    total_calories: 300,
                    total_duration: 30,
                    rank: 2,
                },
            ]
        );
    }

    #[test]
    fn test_standings_ties_keep_team_order() {
        let teams = [team("A"), team("B"), team("C")];
        let users = [user("a@x.com", "A"), user("b@x.com", "B")];
        let activities = [activity("a@x.com", 10, 100), activity("b@x.com", 10, 100)];

        let ranked: Vec<(String, i32)> = compute_standings(&teams, &users, &activities)
            .into_iter()
            .map(|s| (s.team_name, s.rank))
            .collect();
        assert_eq!(
            ranked,
            vec![("A".to_string(), 1), ("B".to_string(), 2), ("C".to_string(), 3)]
        );
    }

    #[test]
    fn test_planned_activities_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let users = [user("tony@marvel.com", "Team Marvel"), user("bruce@dc.com", "Team DC")];

        let planned = plan_activities(&users, now, &mut rng);

        for email in ["tony@marvel.com", "bruce@dc.com"] {
            let count = planned
                .iter()
                .filter(|p| p.user_email.as_deref() == Some(email))
                .count();
            assert!((5..=10).contains(&count), "{email}: {count}");
        }
        for payload in &planned {
            let duration = payload.duration.unwrap();
            let calories = payload.calories_burned.unwrap();
            assert!((20..=120).contains(&duration));
            assert!(calories >= duration * 5 && calories <= duration * 12);
            assert!(ACTIVITY_TYPES.contains(&payload.activity_type.as_deref().unwrap()));
        }
    }

    #[tokio::test]
    async fn test_populate_in_memory() {
        let store = DocumentStore::in_memory();
        let mut rng = StdRng::seed_from_u64(42);

        let summary = populate(&store, &mut rng).await.unwrap();

        assert_eq!(summary.teams, 2);
        assert_eq!(summary.users, 12);
        assert!((60..=120).contains(&summary.activities));
        assert_eq!(summary.leaderboard, 2);
        assert_eq!(summary.workouts, 6);

        let teams = ResourceAccessor::<Team>::new(store.clone()).list().await.unwrap();
        assert!(teams.iter().all(|t| t.members_count == 6));

        let entries = ResourceAccessor::<LeaderboardEntry>::new(store.clone())
            .list()
            .await
            .unwrap();
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 2);
        assert!(entries[0].total_calories >= entries[1].total_calories);
        let activities_total: i32 = entries.iter().map(|e| e.total_activities).sum();
        assert_eq!(activities_total as usize, summary.activities);

        // Running again replaces rather than duplicates.
        let again = populate(&store, &mut rng).await.unwrap();
        assert_eq!(again.users, 12);
        assert_eq!(again.workouts, 6);
    }
}
