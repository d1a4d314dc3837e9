//! In-memory adapters for task posting.

mod task_api;

pub use task_api::InMemoryTaskApi;
