//! Tri-state field wrapper for partial updates.
//!
//! A JSON body for `PATCH` can omit a field, set it to `null`, or give it a
//! value. `Option<T>` collapses the first two cases, so updatable fields
//! use [`Patch`] instead.

use serde::{Deserialize, Deserializer};

/// The state of one field in a partial update.
///
/// Deserialize fields of this type with `#[serde(default)]` so that an
/// omitted key becomes [`Patch::Missing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present; keep the current value.
    Missing,
    /// The field was explicitly `null`; clear the current value.
    Null,
    /// The field carries a new value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns true if the field was omitted.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true if the field was explicitly `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrows the carried value, if any.
    #[must_use]
    pub const fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Missing => Patch::Missing,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(value),
        }
    }

    /// Maps the carried value, leaving `Missing` and `Null` untouched.
    pub fn map<U, F>(self, function: F) -> Patch<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Missing => Patch::Missing,
            Self::Null => Patch::Null,
            Self::Value(value) => Patch::Value(function(value)),
        }
    }

    /// Merges this patch over the current value of an optional field.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Missing => current,
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
