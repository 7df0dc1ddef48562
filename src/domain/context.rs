//! Context domain model.
//!
//! A context is a named category with a display color. Tasks reference a
//! context by id to be grouped together.

use std::fmt;

/// Color assigned to a context created without one.
pub const DEFAULT_CONTEXT_COLOR: &str = "#3b82f6";

/// Contexts seeded into a fresh store, in id order.
pub const DEFAULT_CONTEXTS: [(&str, &str); 4] = [
    ("Work", "#3b82f6"),
    ("Personal", "#10b981"),
    ("Learning", "#f59e0b"),
    ("Health", "#ef4444"),
];

// =============================================================================
// Value Objects
// =============================================================================

/// Identifier of a context, generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(u64);

impl ContextId {
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

impl fmt::Display for ContextId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A stored context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub id: ContextId,
    pub name: String,
    pub color: String,
}

impl Context {
    /// Returns true if `name` equals this context's name, ignoring case.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Input for creating a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContext {
    pub name: String,
    /// Falls back to [`DEFAULT_CONTEXT_COLOR`] when `None`.
    pub color: Option<String>,
}

impl NewContext {
    /// Creates an input with the default color.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Sets an explicit color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builds the stored record under the given id. An empty color counts
    /// as absent.
    #[must_use]
    pub fn into_context(self, id: ContextId) -> Context {
        Context {
            id,
            name: self.name,
            color: self
                .color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTEXT_COLOR.to_string()),
        }
    }
}

/// Inputs for the default contexts, in seeding order.
#[must_use]
pub fn default_contexts() -> Vec<NewContext> {
    DEFAULT_CONTEXTS
        .iter()
        .map(|(name, color)| NewContext::named(*name).with_color(*color))
        .collect()
}
