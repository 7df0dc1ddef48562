//! Integration tests for the task endpoints.

mod common;

use axum::Router;
use axum::http::{Method, StatusCode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use common::{
    TestResponse, assert_field_error, delete, get, patch_json, post_json, seeded_app, send_raw,
};

#[fixture]
fn app() -> Router {
    seeded_app()
}

async fn create(app: &Router, body: Value) -> TestResponse {
    let response = post_json(app, "/api/tasks", &body).await;
    assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
    response
}

// =============================================================================
// POST /api/tasks
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_create_task_resolves_context(app: Router) {
    let response = create(
        &app,
        json!({ "name": "Buy milk", "description": "2% milk", "contextId": 1 }),
    )
    .await;

    assert_eq!(
        response.body,
        json!({
            "id": 1,
            "name": "Buy milk",
            "description": "2% milk",
            "comments": null,
            "contextId": 1,
            "context": { "id": 1, "name": "Work", "color": "#3b82f6" },
        })
    );
}

#[rstest]
#[tokio::test]
async fn test_create_task_without_context_omits_it(app: Router) {
    let response = create(&app, json!({ "name": "Stretch", "description": "10 min" })).await;

    assert_eq!(response.body["contextId"], Value::Null);
    assert!(response.body.get("context").is_none());
}

#[rstest]
#[tokio::test]
async fn test_create_task_with_unknown_context_keeps_id(app: Router) {
    let response = create(
        &app,
        json!({ "name": "Orphan", "description": "d", "contextId": 42 }),
    )
    .await;

    assert_eq!(response.body["contextId"], 42);
    assert!(response.body.get("context").is_none());
}

#[rstest]
#[tokio::test]
async fn test_create_task_ids_increase(app: Router) {
    let first = create(&app, json!({ "name": "a", "description": "d" })).await;
    let second = create(&app, json!({ "name": "b", "description": "d" })).await;

    assert_eq!(first.body["id"], 1);
    assert_eq!(second.body["id"], 2);
}

#[rstest]
#[case(json!({ "description": "d" }), "name", "Item name is required")]
#[case(json!({ "name": "", "description": "d" }), "name", "Item name is required")]
#[case(json!({ "name": "x".repeat(51), "description": "d" }), "name", "Item name cannot exceed 50 characters")]
#[case(json!({ "name": "n" }), "description", "Description is required")]
#[case(json!({ "name": "n", "description": "x".repeat(201) }), "description", "Description cannot exceed 200 characters")]
#[case(json!({ "name": "n", "description": "d", "comments": "x".repeat(1001) }), "comments", "Comments cannot exceed 1000 characters")]
#[tokio::test]
async fn test_create_task_validation(
    app: Router,
    #[case] body: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let response = post_json(&app, "/api/tasks", &body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_field_error(&response.body, field, message);

    let listed = get(&app, "/api/tasks").await;
    assert_eq!(listed.body, json!([]));
}

#[rstest]
#[tokio::test]
async fn test_create_task_reports_every_violation(app: Router) {
    let response = post_json(&app, "/api/tasks", &json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_field_error(&response.body, "name", "Item name is required");
    assert_field_error(&response.body, "description", "Description is required");
}

#[rstest]
#[tokio::test]
async fn test_create_task_length_limits_are_inclusive(app: Router) {
    let response = create(
        &app,
        json!({
            "name": "é".repeat(50),
            "description": "x".repeat(200),
            "comments": "x".repeat(1000),
        }),
    )
    .await;

    assert_eq!(response.body["name"].as_str().map(|name| name.chars().count()), Some(50));
}

#[rstest]
#[case(json!({ "name": "n", "description": "d", "contextId": "one" }))]
#[case(json!({ "name": 5, "description": "d" }))]
#[tokio::test]
async fn test_create_task_wrong_types_are_rejected(app: Router, #[case] body: Value) {
    let response = post_json(&app, "/api/tasks", &body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[rstest]
#[tokio::test]
async fn test_create_task_malformed_json(app: Router) {
    let response = send_raw(
        &app,
        Method::POST,
        "/api/tasks",
        Some("application/json"),
        "{not json",
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn test_create_task_without_content_type(app: Router) {
    let response = send_raw(
        &app,
        Method::POST,
        "/api/tasks",
        None,
        r#"{"name":"n","description":"d"}"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[rstest]
#[tokio::test]
async fn test_create_task_oversized_body_is_payload_too_large(app: Router) {
    let body = json!({
        "name": "n",
        "description": "d",
        "comments": "x".repeat(3 * 1024 * 1024),
    });

    let response = post_json(&app, "/api/tasks", &body).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["code"], "INVALID_BODY");

    let listed = get(&app, "/api/tasks").await;
    assert_eq!(listed.body, json!([]));
}

// =============================================================================
// GET /api/tasks, GET /api/tasks/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_list_tasks_includes_contexts(app: Router) {
    create(&app, json!({ "name": "a", "description": "d", "contextId": 2 })).await;
    create(&app, json!({ "name": "b", "description": "d" })).await;

    let response = get(&app, "/api/tasks").await;

    assert_eq!(response.status, StatusCode::OK);
    let tasks = response.body.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["context"]["name"], "Personal");
    assert!(tasks[1].get("context").is_none());
}

#[rstest]
#[tokio::test]
async fn test_get_task_returns_created_record(app: Router) {
    let created = create(
        &app,
        json!({ "name": "Read", "description": "chapter 3", "comments": "slowly", "contextId": 3 }),
    )
    .await;

    let response = get(&app, "/api/tasks/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created.body);
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("-1")]
#[tokio::test]
async fn test_get_task_invalid_id(app: Router, #[case] id: &str) {
    let response = get(&app, &format!("/api/tasks/{id}")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_ID");
    assert_eq!(response.body["message"], "Invalid task ID");
}

#[rstest]
#[tokio::test]
async fn test_get_task_not_found(app: Router) {
    let response = get(&app, "/api/tasks/7").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "NOT_FOUND");
    assert_eq!(response.body["message"], "Task not found");
}

// =============================================================================
// PATCH /api/tasks/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_update_task_changes_only_given_fields(app: Router) {
    create(
        &app,
        json!({ "name": "Read", "description": "chapter 3", "comments": "slowly", "contextId": 3 }),
    )
    .await;

    let response = patch_json(&app, "/api/tasks/1", &json!({ "name": "Re-read" })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "id": 1,
            "name": "Re-read",
            "description": "chapter 3",
            "comments": "slowly",
            "contextId": 3,
            "context": { "id": 3, "name": "Learning", "color": "#f59e0b" },
        })
    );

    let fetched = get(&app, "/api/tasks/1").await;
    assert_eq!(fetched.body, response.body);
}

#[rstest]
#[tokio::test]
async fn test_update_task_moves_context(app: Router) {
    create(&app, json!({ "name": "Run", "description": "5k", "contextId": 2 })).await;

    let response = patch_json(&app, "/api/tasks/1", &json!({ "contextId": 4 })).await;

    assert_eq!(response.body["contextId"], 4);
    assert_eq!(response.body["context"]["name"], "Health");
}

#[rstest]
#[tokio::test]
async fn test_update_task_null_clears_optional_fields(app: Router) {
    create(
        &app,
        json!({ "name": "Run", "description": "5k", "comments": "easy pace", "contextId": 4 }),
    )
    .await;

    let response = patch_json(
        &app,
        "/api/tasks/1",
        &json!({ "comments": null, "contextId": null }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["comments"], Value::Null);
    assert_eq!(response.body["contextId"], Value::Null);
    assert!(response.body.get("context").is_none());
    assert_eq!(response.body["name"], "Run");
}

#[rstest]
#[tokio::test]
async fn test_update_task_empty_body_is_noop(app: Router) {
    let created = create(&app, json!({ "name": "Run", "description": "5k" })).await;

    let response = patch_json(&app, "/api/tasks/1", &json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created.body);
}

#[rstest]
#[case(json!({ "name": "" }), "name", "Item name is required")]
#[case(json!({ "name": null }), "name", "Item name is required")]
#[case(json!({ "description": null }), "description", "Description is required")]
#[case(json!({ "description": "x".repeat(201) }), "description", "Description cannot exceed 200 characters")]
#[case(json!({ "comments": "x".repeat(1001) }), "comments", "Comments cannot exceed 1000 characters")]
#[tokio::test]
async fn test_update_task_validation(
    app: Router,
    #[case] body: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let created = create(&app, json!({ "name": "Run", "description": "5k" })).await;

    let response = patch_json(&app, "/api/tasks/1", &body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_field_error(&response.body, field, message);

    let fetched = get(&app, "/api/tasks/1").await;
    assert_eq!(fetched.body, created.body);
}

#[rstest]
#[tokio::test]
async fn test_update_task_not_found(app: Router) {
    let response = patch_json(&app, "/api/tasks/9", &json!({ "name": "x" })).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Task not found");
}

#[rstest]
#[tokio::test]
async fn test_update_task_invalid_id(app: Router) {
    let response = patch_json(&app, "/api/tasks/abc", &json!({ "name": "x" })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid task ID");
}

#[rstest]
#[tokio::test]
async fn test_update_task_invalid_id_is_reported_before_body_errors(app: Router) {
    let response = send_raw(&app, Method::PATCH, "/api/tasks/abc", None, r#"{"name":"x"}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_ID");
    assert_eq!(response.body["message"], "Invalid task ID");
}

#[rstest]
#[tokio::test]
async fn test_update_task_without_content_type(app: Router) {
    create(&app, json!({ "name": "Run", "description": "5k" })).await;

    let response = send_raw(&app, Method::PATCH, "/api/tasks/1", None, r#"{"name":"x"}"#).await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// =============================================================================
// DELETE /api/tasks/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_delete_task_twice(app: Router) {
    create(&app, json!({ "name": "Run", "description": "5k" })).await;

    let first = delete(&app, "/api/tasks/1").await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(first.body, Value::Null);

    let second = delete(&app, "/api/tasks/1").await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    let fetched = get(&app, "/api/tasks/1").await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn test_delete_task_invalid_id(app: Router) {
    let response = delete(&app, "/api/tasks/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_ID");
}

#[rstest]
#[tokio::test]
async fn test_deleted_id_is_not_reused(app: Router) {
    create(&app, json!({ "name": "a", "description": "d" })).await;
    delete(&app, "/api/tasks/1").await;

    let next = create(&app, json!({ "name": "b", "description": "d" })).await;

    assert_eq!(next.body["id"], 2);
}
