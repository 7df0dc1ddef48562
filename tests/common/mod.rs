//! Shared helpers for the HTTP integration tests.
//!
//! # Note
//!
//! Each file under `tests/` compiles as its own crate, so helpers used by
//! only one of them would otherwise warn as dead code.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use context_tasks::api::{AppState, create_router};
use context_tasks::infrastructure::InMemoryStore;

// =============================================================================
// Application Builders
// =============================================================================

/// Router backed by a store holding the four default contexts.
pub fn seeded_app() -> Router {
    let store = InMemoryStore::with_default_contexts().expect("default contexts seed");
    create_router(AppState::in_memory(store))
}

/// Router backed by an empty store.
pub fn empty_app() -> Router {
    create_router(AppState::in_memory(InMemoryStore::new()))
}

// =============================================================================
// Request Helpers
// =============================================================================

/// A decoded response: status plus the JSON body, or `Value::Null` when the
/// body is empty.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends one request through a clone of `app`.
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };

    TestResponse { status, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
}

/// Sends `body` as `application/json`.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> TestResponse {
    send_raw(app, method, uri, Some("application/json"), body.to_string()).await
}

/// Sends a raw body with an optional content type.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    send(
        app,
        builder
            .body(Body::from(body.into()))
            .expect("valid request"),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send_json(app, Method::PATCH, uri, body).await
}

// =============================================================================
// Assertions
// =============================================================================

/// Asserts that `body` carries a field error for `field` with `message`.
pub fn assert_field_error(body: &Value, field: &str, message: &str) {
    assert_eq!(body["code"], "VALIDATION_ERROR", "body: {body}");
    let details = body["details"].as_array().expect("details array");
    assert!(
        details
            .iter()
            .any(|detail| detail["field"] == field && detail["message"] == message),
        "expected {field}: {message} in {body}"
    );
}
