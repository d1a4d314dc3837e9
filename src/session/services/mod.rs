//! Application services for the client session.

mod lifecycle;

pub use lifecycle::{SessionService, SessionServiceError, SessionServiceResult};
