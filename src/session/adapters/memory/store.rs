//! In-memory session store holding the user as JSON text.

use std::sync::{Arc, RwLock};

use crate::session::{
    domain::UserProfile,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe store that keeps the serialised user in memory, the way a
/// browser keeps it in local storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with raw stored text.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// Returns the raw stored text.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn raw(&self) -> SessionStoreResult<Option<String>> {
        let slot = self.slot.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slot.clone())
    }
}

impl SessionStore for InMemorySessionStore {
    fn load_user(&self) -> SessionStoreResult<Option<UserProfile>> {
        let slot = self.slot.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        slot.as_deref()
            .map(serde_json::from_str::<UserProfile>)
            .transpose()
            .map_err(SessionStoreError::corrupt)
    }

    fn save_user(&self, user: &UserProfile) -> SessionStoreResult<()> {
        let encoded = serde_json::to_string(user).map_err(SessionStoreError::corrupt)?;
        let mut slot = self.slot.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *slot = Some(encoded);
        Ok(())
    }

    fn clear_user(&self) -> SessionStoreResult<()> {
        let mut slot = self.slot.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *slot = None;
        Ok(())
    }
}
