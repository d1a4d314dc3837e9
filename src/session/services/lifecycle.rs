//! Service layer for session start-up, sign-in and sign-out.

use crate::session::{
    domain::{Category, Session, UserProfile},
    ports::{CategoryApi, CategoryApiError, SessionStore, SessionStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// Session storage failed.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    /// The category catalogue could not be fetched.
    #[error(transparent)]
    Categories(#[from] CategoryApiError),
}

/// Result type for session service operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Session orchestration service.
#[derive(Clone)]
pub struct SessionService<S, C>
where
    S: SessionStore,
    C: CategoryApi,
{
    store: Arc<S>,
    categories: Arc<C>,
}

impl<S, C> SessionService<S, C>
where
    S: SessionStore,
    C: CategoryApi,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(store: Arc<S>, categories: Arc<C>) -> Self {
        Self { store, categories }
    }

    /// Builds the session at application start.
    ///
    /// Restores the persisted user and loads the category catalogue. A
    /// corrupt stored user is discarded and an unavailable catalogue leaves
    /// the list empty; both are logged and neither stops start-up.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Store`] when storage itself fails.
    pub async fn bootstrap(&self) -> SessionServiceResult<Session> {
        let mut session = Session::anonymous();

        match self.store.load_user() {
            Ok(Some(user)) => session.sign_in(user),
            Ok(None) => debug!("user not signed in yet"),
            Err(SessionStoreError::Corrupt(err)) => {
                warn!(error = %err, "discarding corrupt stored session");
                self.store.clear_user()?;
            }
            Err(err) => return Err(err.into()),
        }

        if let Err(err) = self.refresh_categories(&mut session).await {
            error!(error = %err, "failed to fetch categories");
        }

        Ok(session)
    }

    /// Reloads the category catalogue into `session`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Categories`] when the API fails; the
    /// previous catalogue is kept.
    pub async fn refresh_categories(&self, session: &mut Session) -> SessionServiceResult<()> {
        let records = self.categories.fetch_categories().await?;
        let categories: Vec<Category> = records.into_iter().map(Category::from).collect();
        debug!(count = categories.len(), "loaded categories");
        session.set_categories(categories);
        Ok(())
    }

    /// Persists `user` and marks the session as signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Store`] when the user cannot be
    /// persisted; the session is left unchanged.
    pub fn sign_in(&self, session: &mut Session, user: UserProfile) -> SessionServiceResult<()> {
        self.store.save_user(&user)?;
        session.sign_in(user);
        Ok(())
    }

    /// Clears the persisted user and signs the session out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Store`] when storage cannot be
    /// cleared; the session is left unchanged.
    pub fn sign_out(&self, session: &mut Session) -> SessionServiceResult<()> {
        self.store.clear_user()?;
        session.sign_out();
        Ok(())
    }
}
