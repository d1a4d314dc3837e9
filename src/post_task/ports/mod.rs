//! Port contracts for task posting.
//!
//! Ports define infrastructure-agnostic interfaces used by the posting
//! service.

pub mod task_api;

pub use task_api::{
    ApiFieldError, FALLBACK_FAILURE_MESSAGE, TaskApiError, TaskApiResult, TaskCreationApi,
};
