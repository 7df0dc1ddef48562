//! Context endpoints.
//!
//! - `GET /api/contexts`
//! - `POST /api/contexts`
//! - `GET /api/contexts/{id}`
//! - `GET /api/contexts/{id}/tasks`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::dto::{ContextResponse, CreateContextRequest, TaskResponse, validate_create_context};
use super::error::ApiErrorResponse;
use super::extract::JsonBody;
use super::handlers::AppState;
use crate::domain::ContextId;

/// Lists all contexts in creation order.
///
/// # Errors
///
/// Returns 500 if the repository fails.
pub async fn list_contexts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContextResponse>>, ApiErrorResponse> {
    let contexts = state.context_repository.list().await?;
    Ok(Json(contexts.into_iter().map(ContextResponse::from).collect()))
}

/// Creates a context, or returns the existing one with the same name.
///
/// # Request Body
///
/// ```json
/// { "name": "Errands", "color": "#8b5cf6" }
/// ```
///
/// # Response
///
/// - **201 Created**: a new context was stored
/// - **200 OK**: a context with this name (ignoring case) already existed;
///   it is returned unchanged and `color` is ignored
/// - **400 Bad Request**: the name is missing or blank
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] for validation and repository failures.
pub async fn create_context(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateContextRequest>,
) -> Result<(StatusCode, Json<ContextResponse>), ApiErrorResponse> {
    let context = validate_create_context(request)?;

    let creation = state.context_repository.find_or_create(context).await?;

    let status = if creation.created {
        tracing::info!(
            context_id = %creation.context.id,
            name = %creation.context.name,
            "Context created"
        );
        StatusCode::CREATED
    } else {
        tracing::debug!(context_id = %creation.context.id, "Context already exists");
        StatusCode::OK
    };

    Ok((status, Json(ContextResponse::from(creation.context))))
}

/// Fetches one context.
///
/// # Errors
///
/// Returns 400 for a non-numeric id and 404 for an unknown one.
pub async fn get_context(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ContextResponse>, ApiErrorResponse> {
    let id = parse_context_id(&raw_id)?;

    state
        .context_repository
        .find_by_id(id)
        .await?
        .map(|context| Json(ContextResponse::from(context)))
        .ok_or_else(|| ApiErrorResponse::not_found("Context not found"))
}

/// Lists the tasks grouped under one context.
///
/// # Errors
///
/// Returns 400 for a non-numeric id and 404 for an unknown context.
pub async fn list_context_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let id = parse_context_id(&raw_id)?;

    if state.context_repository.find_by_id(id).await?.is_none() {
        return Err(ApiErrorResponse::not_found("Context not found"));
    }

    let tasks = state.task_repository.list_by_context(id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

fn parse_context_id(raw: &str) -> Result<ContextId, ApiErrorResponse> {
    raw.parse::<u64>()
        .map(ContextId::new)
        .map_err(|_| ApiErrorResponse::invalid_id("Invalid context ID"))
}
