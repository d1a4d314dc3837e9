//! Port for persisting the signed-in user between runs.

use crate::session::domain::UserProfile;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Persistence contract for the signed-in user.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted user.
    ///
    /// Returns `None` when nobody has signed in yet.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Corrupt`] when the stored value cannot be
    /// decoded or [`SessionStoreError::Persistence`] when storage fails.
    fn load_user(&self) -> SessionStoreResult<Option<UserProfile>>;

    /// Persists the signed-in user, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when encoding or storage fails.
    fn save_user(&self, user: &UserProfile) -> SessionStoreResult<()>;

    /// Removes the persisted user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when storage fails.
    fn clear_user(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The stored value is not a valid user profile.
    #[error("stored session is corrupt: {0}")]
    Corrupt(Arc<serde_json::Error>),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a decoding error.
    #[must_use]
    pub fn corrupt(err: serde_json::Error) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
