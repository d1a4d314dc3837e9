//! In-memory adapters for the client session.

mod category_api;
mod store;

pub use category_api::InMemoryCategoryApi;
pub use store::InMemorySessionStore;
