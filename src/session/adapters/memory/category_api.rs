//! In-memory category catalogue.

use async_trait::async_trait;

use crate::session::{
    domain::CategoryRecord,
    ports::{CategoryApi, CategoryApiError, CategoryApiResult},
};

/// Category API serving a fixed catalogue, or a fixed failure.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryApi {
    response: CategoryApiResult<Vec<CategoryRecord>>,
}

impl InMemoryCategoryApi {
    /// Creates an API that always returns `records`.
    #[must_use]
    pub const fn new(records: Vec<CategoryRecord>) -> Self {
        Self {
            response: Ok(records),
        }
    }

    /// Creates an API that always fails with `message`.
    #[must_use]
    pub fn unavailable(message: &str) -> Self {
        Self {
            response: Err(CategoryApiError::transport(std::io::Error::other(
                message.to_owned(),
            ))),
        }
    }
}

#[async_trait]
impl CategoryApi for InMemoryCategoryApi {
    async fn fetch_categories(&self) -> CategoryApiResult<Vec<CategoryRecord>> {
        self.response.clone()
    }
}
