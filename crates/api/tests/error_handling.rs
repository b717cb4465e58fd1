//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use notes_api::error::AppError;
use notes_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn not_found() -> CoreError {
    CoreError::NotFound {
        entity: "Note",
        id: "abc".to_string(),
    }
}

#[tokio::test]
async fn create_failure_returns_500_with_fixed_message() {
    let err = AppError::CreateFailed(CoreError::Validation("title is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Failed to create note" }));
}

#[tokio::test]
async fn fetch_failure_returns_500_with_fixed_message() {
    let err = AppError::FetchFailed(CoreError::Internal("pool timed out".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Failed to fetch notes" }));
}

#[tokio::test]
async fn update_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::UpdateFailed(not_found())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Note not found or failed to update");
}

#[tokio::test]
async fn update_internal_failure_collapses_to_404() {
    let err = AppError::UpdateFailed(CoreError::Internal("connection reset".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Note not found or failed to update");
}

#[tokio::test]
async fn delete_failures_return_404() {
    for cause in [not_found(), CoreError::Internal("disk full".into())] {
        let (status, json) = error_to_response(AppError::DeleteFailed(cause)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Note not found or failed to delete");
    }
}

#[tokio::test]
async fn response_does_not_leak_the_cause() {
    let err = AppError::FetchFailed(CoreError::Internal(
        "password authentication failed for user notes".into(),
    ));

    let (_, json) = error_to_response(err).await;

    let body_text = json.to_string();
    assert!(
        !body_text.contains("password"),
        "Error responses must not include the underlying cause"
    );
    assert_eq!(json.as_object().unwrap().len(), 1);
}
