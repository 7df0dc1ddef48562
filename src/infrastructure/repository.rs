//! Repository traits for domain entities.
//!
//! Every method returns a boxed `'static` future so the traits stay
//! object-safe and can be shared as `Arc<dyn ...>` inside the axum state.
//! Implementations do their work inside the future, so nothing happens
//! until it is awaited.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{
    Context, ContextId, NewContext, NewTask, TaskId, TaskPatch, TaskWithContext,
};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Entity was not found.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result of [`ContextRepository::find_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextCreation {
    pub context: Context,
    /// False when an existing context with the same name was returned.
    pub created: bool,
}

// =============================================================================
// Context Repository
// =============================================================================

/// Repository trait for Context entities.
pub trait ContextRepository: Send + Sync {
    /// Stores a new context under the next id.
    ///
    /// Names are not checked for uniqueness; use [`Self::find_or_create`]
    /// when duplicates must be avoided.
    fn create(&self, context: NewContext) -> BoxFuture<'static, Result<Context, RepositoryError>>;

    /// Lists all contexts in id order.
    fn list(&self) -> BoxFuture<'static, Result<Vec<Context>, RepositoryError>>;

    /// Finds a context by its ID.
    fn find_by_id(
        &self,
        id: ContextId,
    ) -> BoxFuture<'static, Result<Option<Context>, RepositoryError>>;

    /// Finds a context whose name equals `name`, ignoring case.
    fn find_by_name(&self, name: &str)
    -> BoxFuture<'static, Result<Option<Context>, RepositoryError>>;

    /// Returns the context named like `context.name` (ignoring case), or
    /// creates it. The lookup and the insert happen atomically.
    fn find_or_create(
        &self,
        context: NewContext,
    ) -> BoxFuture<'static, Result<ContextCreation, RepositoryError>>;
}

// =============================================================================
// Task Repository
// =============================================================================

/// Repository trait for Task entities.
///
/// Reads return [`TaskWithContext`]: the implementation resolves each
/// task's context in the same operation.
pub trait TaskRepository: Send + Sync {
    /// Stores a new task under the next id.
    fn create(&self, task: NewTask) -> BoxFuture<'static, Result<TaskWithContext, RepositoryError>>;

    /// Lists all tasks in id order.
    fn list(&self) -> BoxFuture<'static, Result<Vec<TaskWithContext>, RepositoryError>>;

    /// Lists the tasks that reference `context_id`, in id order.
    fn list_by_context(
        &self,
        context_id: ContextId,
    ) -> BoxFuture<'static, Result<Vec<TaskWithContext>, RepositoryError>>;

    /// Finds a task by its ID.
    fn find_by_id(
        &self,
        id: TaskId,
    ) -> BoxFuture<'static, Result<Option<TaskWithContext>, RepositoryError>>;

    /// Merges `patch` over the stored task.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no task has this id.
    fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> BoxFuture<'static, Result<TaskWithContext, RepositoryError>>;

    /// Deletes a task by its ID.
    ///
    /// Returns `Ok(true)` if the task was deleted, `Ok(false)` if it didn't exist.
    fn delete(&self, id: TaskId) -> BoxFuture<'static, Result<bool, RepositoryError>>;
}
