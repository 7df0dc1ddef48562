//! Task endpoints.
//!
//! Each handler validates its input, calls the [`TaskRepository`] once and
//! converts the result into a [`TaskResponse`].
//!
//! [`TaskRepository`]: crate::infrastructure::TaskRepository

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::dto::{
    CreateTaskRequest, TaskResponse, UpdateTaskRequest, validate_create_task,
    validate_update_task,
};
use super::error::ApiErrorResponse;
use super::extract::JsonBody;
use super::handlers::AppState;
use crate::domain::TaskId;
use crate::infrastructure::RepositoryError;

const TASK_NOT_FOUND: &str = "Task not found";

// =============================================================================
// Queries
// =============================================================================

/// Lists all tasks with their contexts resolved.
///
/// # Errors
///
/// Returns 500 if the repository fails.
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let tasks = state.task_repository.list().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Fetches one task.
///
/// # Response
///
/// - **200 OK**: the task with its context
/// - **400 Bad Request**: `id` is not an unsigned integer
/// - **404 Not Found**: no task has this id
///
/// # Errors
///
/// See the response codes above.
pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let id = parse_task_id(&raw_id)?;

    state
        .task_repository
        .find_by_id(id)
        .await?
        .map(|task| Json(TaskResponse::from(task)))
        .ok_or_else(|| ApiErrorResponse::not_found(TASK_NOT_FOUND))
}

// =============================================================================
// Mutations
// =============================================================================

/// Creates a new task.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Buy milk",
///   "description": "2% milk",
///   "comments": "optional, up to 1000 characters",
///   "contextId": 1
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: the stored task with its context
/// - **400 Bad Request**: validation error
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] for validation and repository failures.
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let task = validate_create_task(request)?;

    let created = state.task_repository.create(task).await?;

    tracing::info!(
        task_id = %created.task.id,
        context_id = ?created.task.context_id.map(|id| id.get()),
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// Applies a partial update to a task.
///
/// Only the fields present in the body change. `comments` and `contextId`
/// may be set to `null` to clear them.
///
/// # Response
///
/// - **200 OK**: the updated task with its context
/// - **400 Bad Request**: invalid id or validation error
/// - **404 Not Found**: no task has this id
/// - **415 Unsupported Media Type**: the body is not sent as JSON
///
/// An invalid id is reported before any problem with the body.
///
/// # Errors
///
/// See the response codes above.
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<JsonBody<UpdateTaskRequest>, ApiErrorResponse>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let id = parse_task_id(&raw_id)?;
    let JsonBody(request) = body?;
    let patch = validate_update_task(request)?;

    let updated = state
        .task_repository
        .update(id, patch)
        .await
        .map_err(|error| match error {
            RepositoryError::NotFound(_) => ApiErrorResponse::not_found(TASK_NOT_FOUND),
            other => ApiErrorResponse::from(other),
        })?;

    tracing::info!(task_id = %id, "Task updated");

    Ok(Json(TaskResponse::from(updated)))
}

/// Deletes a task.
///
/// # Response
///
/// - **204 No Content**: the task was removed
/// - **400 Bad Request**: `id` is not an unsigned integer
/// - **404 Not Found**: no task has this id
///
/// # Errors
///
/// See the response codes above.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let id = parse_task_id(&raw_id)?;

    if state.task_repository.delete(id).await? {
        tracing::info!(task_id = %id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiErrorResponse::not_found(TASK_NOT_FOUND))
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiErrorResponse> {
    raw.parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| ApiErrorResponse::invalid_id("Invalid task ID"))
}

// =============================================================================
// Tests
// =============================================================================
