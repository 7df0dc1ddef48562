//! Task domain model.
//!
//! Tasks are short records with a name, a description, optional comments
//! and an optional reference to a [`Context`].

use std::fmt;

use super::context::{Context, ContextId};
use super::patch::Patch;

// =============================================================================
// Value Objects
// =============================================================================

/// Identifier of a task, generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub comments: Option<String>,
    pub context_id: Option<ContextId>,
}

impl Task {
    /// Merges the fields present in `patch` over this task.
    ///
    /// Fields the patch leaves `Missing` keep their current value. Empty
    /// comments and a zero context id are stored as absent, as on creation.
    #[must_use]
    pub fn apply(self, patch: TaskPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            description: patch.description.unwrap_or(self.description),
            comments: normalize_comments(patch.comments.apply_to(self.comments)),
            context_id: normalize_context_id(patch.context_id.apply_to(self.context_id)),
        }
    }

    /// Pairs this task with its resolved context.
    #[must_use]
    pub fn with_context(self, context: Option<Context>) -> TaskWithContext {
        TaskWithContext {
            task: self,
            context,
        }
    }
}

/// Input for creating a task. Lengths are checked before this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub comments: Option<String>,
    pub context_id: Option<ContextId>,
}

impl NewTask {
    /// Creates an input without comments or context.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            comments: None,
            context_id: None,
        }
    }

    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    #[must_use]
    pub fn with_context_id(mut self, context_id: ContextId) -> Self {
        self.context_id = Some(context_id);
        self
    }

    /// Builds the stored record under the given id.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            comments: normalize_comments(self.comments),
            context_id: normalize_context_id(self.context_id),
        }
    }
}

/// A partial update of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub comments: Patch<String>,
    pub context_id: Patch<ContextId>,
}

impl TaskPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.comments.is_missing()
            && self.context_id.is_missing()
    }
}

/// A task with its context resolved. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskWithContext {
    pub task: Task,
    /// `None` when the task has no context id or the id is dangling.
    pub context: Option<Context>,
}

fn normalize_comments(comments: Option<String>) -> Option<String> {
    comments.filter(|comments| !comments.is_empty())
}

fn normalize_context_id(context_id: Option<ContextId>) -> Option<ContextId> {
    context_id.filter(|id| id.get() != 0)
}
