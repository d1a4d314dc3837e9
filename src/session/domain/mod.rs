//! Domain model for the client session.
//!
//! Replaces ambient browser storage with a value that is created at start-up
//! and handed to the features that read it.

mod category;
mod error;
mod session;
mod user;

pub use category::{Category, CategoryRecord, LocalizedName};
pub use error::SessionDomainError;
pub use session::Session;
pub use user::UserProfile;
