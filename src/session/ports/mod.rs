//! Port contracts for the client session.

pub mod category_api;
pub mod store;

pub use category_api::{CategoryApi, CategoryApiError, CategoryApiResult};
pub use store::{SessionStore, SessionStoreError, SessionStoreResult};
