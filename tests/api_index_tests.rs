// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;

mod common;
use common::{create_test_app, send};

#[tokio::test]
async fn test_index_lists_five_collections() {
    let (app, state) = create_test_app();

    for uri in ["/", "/api", "/api/"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");

        let index = body.as_object().expect("object");
        assert_eq!(index.len(), 5, "{uri}");
        for key in ["users", "teams", "activities", "leaderboard", "workouts"] {
            let url = index[key].as_str().expect("string address");
            assert!(!url.is_empty());
            assert_eq!(
                url,
                format!("{}/api/{}/", state.config.api_base_url, key),
                "{uri} {key}"
            );
        }
    }
}

#[tokio::test]
async fn test_index_addresses_are_served() {
    let (app, state) = create_test_app();
    let (_, body) = send(&app, "GET", "/api/", None).await;

    for url in body.as_object().unwrap().values() {
        let path = url
            .as_str()
            .unwrap()
            .strip_prefix(&state.config.api_base_url)
            .unwrap();
        let (status, list) = send(&app, "GET", path, None).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(list.is_array());
    }
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["build_id"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _) = create_test_app();

    let (status, _) = send(&app, "GET", "/api/trainers/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
