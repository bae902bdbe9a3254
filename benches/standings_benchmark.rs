// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use octofit_tracker::models::{Activity, ObjectId, Team, User};
use octofit_tracker::services::compute_standings;
use octofit_tracker::services::seed::plan_activities;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn fixture(teams: usize, users_per_team: usize) -> (Vec<Team>, Vec<User>, Vec<Activity>) {
    let now = Utc::now();
    let teams: Vec<Team> = (0..teams)
        .map(|t| Team {
            id: ObjectId::new(),
            name: format!("Team {t}"),
            description: String::new(),
            members_count: users_per_team as i32,
            created_at: now,
        })
        .collect();

    let users: Vec<User> = teams
        .iter()
        .flat_map(|team| {
            (0..users_per_team).map(move |u| User {
                id: ObjectId::new(),
                name: format!("Hero {u}"),
                email: format!("hero{u}@{}.com", team.name.replace(' ', "").to_lowercase()),
                team: team.name.clone(),
                created_at: now,
            })
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(0);
    let activities = plan_activities(&users, now, &mut rng)
        .into_iter()
        .map(|p| Activity {
            id: ObjectId::new(),
            user_email: p.user_email.unwrap_or_default(),
            activity_type: p.activity_type.unwrap_or_default(),
            duration: p.duration.unwrap_or_default(),
            calories_burned: p.calories_burned.unwrap_or_default(),
            date: now,
            notes: p.notes.unwrap_or_default(),
        })
        .collect();

    (teams, users, activities)
}

fn benchmark_compute_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_standings");

    let (teams, users, activities) = fixture(2, 6);
    group.bench_function("seed_sized", |b| {
        b.iter(|| compute_standings(black_box(&teams), black_box(&users), black_box(&activities)))
    });

    let (teams, users, activities) = fixture(50, 200);
    group.bench_function("large_league", |b| {
        b.iter(|| compute_standings(black_box(&teams), black_box(&users), black_box(&activities)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_compute_standings);
criterion_main!(benches);
