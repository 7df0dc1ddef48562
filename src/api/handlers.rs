//! Shared handler state and the health endpoint.

use std::sync::Arc;

use axum::Json;

use crate::infrastructure::{ContextRepository, InMemoryStore, TaskRepository};

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Uses trait objects (`dyn`) so tests and `main` can plug in any storage
/// backend. The state is built once at startup and cloned into each request;
/// clones share the same repositories.
#[derive(Clone)]
pub struct AppState {
    /// Context repository.
    pub context_repository: Arc<dyn ContextRepository>,
    /// Task repository. Resolves contexts for every task it returns.
    pub task_repository: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Creates a new `AppState` from explicit repositories.
    #[must_use]
    pub fn new(
        context_repository: Arc<dyn ContextRepository>,
        task_repository: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            context_repository,
            task_repository,
        }
    }

    /// Creates an `AppState` where one in-memory store backs both
    /// repositories.
    #[must_use]
    pub fn in_memory(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Health check response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check endpoint.
///
/// # Response
///
/// - **200 OK**: Service is healthy
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
