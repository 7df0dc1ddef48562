//! Data Transfer Objects for API requests and responses.
//!
//! This module contains DTOs that are separate from domain models,
//! providing a clean API contract. JSON field names are camelCase.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::domain::{
    Context, ContextId, NewContext, NewTask, Patch, Task, TaskPatch, TaskWithContext,
};

// =============================================================================
// Limits
// =============================================================================

/// Maximum length of a task name, in characters.
pub const TASK_NAME_MAX_CHARS: usize = 50;
/// Maximum length of a task description, in characters.
pub const TASK_DESCRIPTION_MAX_CHARS: usize = 200;
/// Maximum length of task comments, in characters.
pub const TASK_COMMENTS_MAX_CHARS: usize = 1000;

// =============================================================================
// Context DTOs
// =============================================================================

/// Request DTO for creating a context.
///
/// `name` is optional here so that a missing name is reported as a field
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContextRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Response DTO for a context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl From<&Context> for ContextResponse {
    fn from(context: &Context) -> Self {
        Self {
            id: context.id.get(),
            name: context.name.clone(),
            color: context.color.clone(),
        }
    }
}

impl From<Context> for ContextResponse {
    fn from(context: Context) -> Self {
        Self {
            id: context.id.get(),
            name: context.name,
            color: context.color,
        }
    }
}

// =============================================================================
// Task DTOs
// =============================================================================

/// Request DTO for creating a new task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub context_id: Option<u64>,
}

/// Request DTO for a partial task update.
///
/// Each field distinguishes "absent" from `null`; see [`Patch`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub comments: Patch<String>,
    #[serde(default)]
    pub context_id: Patch<u64>,
}

/// Response DTO for a task with its context resolved.
///
/// `comments` and `contextId` serialize as `null` when unset; `context` is
/// omitted when the task has no resolvable context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub comments: Option<String>,
    pub context_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextResponse>,
}

impl From<TaskWithContext> for TaskResponse {
    fn from(task_with_context: TaskWithContext) -> Self {
        let TaskWithContext { task, context } = task_with_context;
        let Task {
            id,
            name,
            description,
            comments,
            context_id,
        } = task;

        Self {
            id: id.get(),
            name,
            description,
            comments,
            context_id: context_id.map(ContextId::get),
            context: context.map(ContextResponse::from),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validates a create-context request.
///
/// # Validation Rules
///
/// - Name is required and must not be blank; surrounding whitespace is trimmed
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated rule.
pub fn validate_create_context(
    request: CreateContextRequest,
) -> Result<NewContext, ValidationError> {
    let name = request
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    match name {
        Some(name) => Ok(NewContext {
            name,
            color: request.color,
        }),
        None => Err(ValidationError::single("name", "Context name is required")),
    }
}

/// Validates a create-task request.
///
/// # Validation Rules
///
/// - Name is required, 1 to 50 characters
/// - Description is required, 1 to 200 characters
/// - Comments are optional, at most 1000 characters
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated rule.
pub fn validate_create_task(request: CreateTaskRequest) -> Result<NewTask, ValidationError> {
    let mut errors = ValidationError::default();

    let name = request.name.unwrap_or_default();
    check_name(&name, &mut errors);

    let description = request.description.unwrap_or_default();
    check_description(&description, &mut errors);

    if let Some(comments) = &request.comments {
        check_comments(comments, &mut errors);
    }

    errors.into_result(NewTask {
        name,
        description,
        comments: request.comments,
        context_id: request.context_id.map(ContextId::new),
    })
}

/// Validates a partial task update.
///
/// Present fields follow the same rules as on creation. `name` and
/// `description` cannot be cleared, so `null` is rejected for them;
/// `comments` and `contextId` accept `null`, which clears them.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violated rule.
pub fn validate_update_task(request: UpdateTaskRequest) -> Result<TaskPatch, ValidationError> {
    let mut errors = ValidationError::default();

    let name = match request.name {
        Patch::Missing => None,
        Patch::Null => {
            errors.push("name", "Item name is required");
            None
        }
        Patch::Value(name) => {
            check_name(&name, &mut errors);
            Some(name)
        }
    };

    let description = match request.description {
        Patch::Missing => None,
        Patch::Null => {
            errors.push("description", "Description is required");
            None
        }
        Patch::Value(description) => {
            check_description(&description, &mut errors);
            Some(description)
        }
    };

    if let Patch::Value(comments) = request.comments.as_ref() {
        check_comments(comments, &mut errors);
    }

    errors.into_result(TaskPatch {
        name,
        description,
        comments: request.comments,
        context_id: request.context_id.map(ContextId::new),
    })
}

fn check_name(name: &str, errors: &mut ValidationError) {
    let length = name.chars().count();
    if length == 0 {
        errors.push("name", "Item name is required");
    } else if length > TASK_NAME_MAX_CHARS {
        errors.push("name", "Item name cannot exceed 50 characters");
    }
}

fn check_description(description: &str, errors: &mut ValidationError) {
    let length = description.chars().count();
    if length == 0 {
        errors.push("description", "Description is required");
    } else if length > TASK_DESCRIPTION_MAX_CHARS {
        errors.push("description", "Description cannot exceed 200 characters");
    }
}

fn check_comments(comments: &str, errors: &mut ValidationError) {
    if comments.chars().count() > TASK_COMMENTS_MAX_CHARS {
        errors.push("comments", "Comments cannot exceed 1000 characters");
    }
}

// =============================================================================
// Tests
// =============================================================================
