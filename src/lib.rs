//! # context-tasks
//!
//! A personal task tracker where every task may belong to a context
//! (Work, Personal, ...), served over a JSON REST API.
//!
//! ## Layout
//!
//! - [`domain`]: contexts, tasks and the partial-update wrapper
//! - [`infrastructure`]: repository traits and the in-memory store
//! - [`api`]: axum handlers, DTOs, validation and error rendering
//! - [`config`]: environment-driven configuration
//! - [`server`]: listener bootstrap and graceful shutdown
//!
//! ## Example
//!
//! ```ignore
//! use context_tasks::api::{AppState, create_router};
//! use context_tasks::infrastructure::InMemoryStore;
//!
//! let store = InMemoryStore::with_default_contexts()?;
//! let router = create_router(AppState::in_memory(store));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
