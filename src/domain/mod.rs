//! Domain module for context-grouped tasks.
//!
//! This module contains the domain models and the partial-update wrapper.

pub mod context;
pub mod patch;
pub mod task;

pub use context::{
    Context, ContextId, DEFAULT_CONTEXT_COLOR, DEFAULT_CONTEXTS, NewContext, default_contexts,
};
pub use patch::Patch;
pub use task::{NewTask, Task, TaskId, TaskPatch, TaskWithContext};
