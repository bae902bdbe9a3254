// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapping of application errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use octofit_tracker::error::AppError;
use serde_json::Value;
use validator::Validate;

async fn render(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_response() {
    let (status, body) = render(AppError::NotFound("Object with id 'x' not found.".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "Object with id 'x' not found.");
    assert!(body.get("fields").is_none());
}

#[tokio::test]
async fn test_validation_response_carries_fields() {
    let (status, body) = render(AppError::invalid_field("email", "Enter a valid email address.")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["fields"]["email"][0], "Enter a valid email address.");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_bad_request_response() {
    let (status, body) = render(AppError::BadRequest("Expected a JSON object".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["details"], "Expected a JSON object");
}

#[tokio::test]
async fn test_server_errors_hide_details() {
    let (status, body) = render(AppError::Database("connection reset".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());

    let (status, body) = render(AppError::Internal(anyhow::anyhow!("boom"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[derive(Validate)]
struct Signup {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    name: String,
    #[validate(email)]
    email: String,
}

#[test]
fn test_from_validation_errors() {
    let signup = Signup {
        name: String::new(),
        email: "nope".into(),
    };
    let err = AppError::from(signup.validate().unwrap_err());

    let fields = err.field_errors().expect("validation error");
    assert_eq!(fields["name"], vec!["This field may not be blank."]);
    // No message configured: the validator code is reported.
    assert_eq!(fields["email"], vec!["Invalid value (email)."]);
}

#[test]
fn test_error_display() {
    let err = AppError::invalid_field("name", "taken");
    assert_eq!(err.to_string(), "Validation failed for: name");
    assert!(err.field_errors().is_some());
    assert!(AppError::BadRequest("x".into()).field_errors().is_none());
}
