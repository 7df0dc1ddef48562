//! Infrastructure module for storage.
//!
//! This module contains the repository traits and their in-memory
//! implementation.

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryStore;
pub use repository::{ContextCreation, ContextRepository, RepositoryError, TaskRepository};
