//! Port for the marketplace's categories endpoint.

use crate::session::domain::CategoryRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category API calls.
pub type CategoryApiResult<T> = Result<T, CategoryApiError>;

/// Category catalogue contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// Fetches every category record.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryApiError`] when the catalogue cannot be retrieved.
    async fn fetch_categories(&self) -> CategoryApiResult<Vec<CategoryRecord>>;
}

/// Errors returned by category API implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryApiError {
    /// The request failed.
    #[error("failed to fetch categories: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
