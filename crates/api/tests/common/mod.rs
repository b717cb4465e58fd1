#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notes_api::config::{LogFormat, ServerConfig};
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_core::error::CoreError;
use notes_core::memory::MemoryNoteStore;
use notes_core::note::{CreateNote, Note, UpdateNote};
use notes_core::store::{NoteStore, SharedNoteStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: "memory://".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store, using the same
/// builder as `main.rs`.
pub fn build_test_app(store: SharedNoteStore) -> Router {
    let config = test_config();
    build_app_router(AppState::new(store, config.clone()), &config)
}

/// Router over a fresh, empty in-memory store.
pub fn memory_app() -> (Router, Arc<MemoryNoteStore>) {
    let store = Arc::new(MemoryNoteStore::new());
    (build_test_app(store.clone()), store)
}

/// A store whose every operation fails as if the database were down.
pub struct FailingStore;

fn unavailable() -> CoreError {
    CoreError::Internal("connection refused".to_string())
}

#[async_trait]
impl NoteStore for FailingStore {
    async fn insert(&self, _input: &CreateNote) -> Result<Note, CoreError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        Err(unavailable())
    }

    async fn update_by_id(&self, _id: &str, _input: &UpdateNote) -> Result<Note, CoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), CoreError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
