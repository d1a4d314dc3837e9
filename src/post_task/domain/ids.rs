//! Identifier types for the task-posting domain.

use super::PostTaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque reference to a task created by the task-creation API.
///
/// The marketplace backend owns the identifier format, so the client only
/// guarantees the value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskReference(String);

impl TaskReference {
    /// Creates a validated task reference.
    ///
    /// # Errors
    ///
    /// Returns [`PostTaskDomainError::EmptyTaskReference`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PostTaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PostTaskDomainError::EmptyTaskReference);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a reference from a freshly generated UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskReference {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
