//! HTTP API layer.
//!
//! Handlers, request/response DTOs, error rendering and the router.

pub mod contexts;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod tasks;

pub use dto::{
    ContextResponse, CreateContextRequest, CreateTaskRequest, TaskResponse, UpdateTaskRequest,
};
pub use error::{ApiError, ApiErrorResponse, FieldError, ValidationError};
pub use extract::JsonBody;
pub use handlers::{AppState, HealthResponse};
pub use routes::create_router;
