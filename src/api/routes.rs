//! Routing definitions.
//!
//! All resource routes live under `/api`; `/health` sits at the root so
//! load balancers can probe it without knowing the API prefix.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::contexts::{create_context, get_context, list_context_tasks, list_contexts};
use super::handlers::{AppState, health_check};
use super::tasks::{create_task, delete_task, get_task, list_tasks, update_task};

/// Creates the application router with all routes and middleware.
///
/// # Examples
///
/// ```ignore
/// use context_tasks::api::{AppState, create_router};
/// use context_tasks::infrastructure::InMemoryStore;
///
/// let state = AppState::in_memory(InMemoryStore::with_default_contexts()?);
/// let router = create_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Contexts
        .route("/contexts", get(list_contexts).post(create_context))
        .route("/contexts/{id}", get(get_context))
        .route("/contexts/{id}/tasks", get(list_context_tasks))
        // Tasks
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Permissive CORS so a browser UI served from another origin can call the
/// API.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
