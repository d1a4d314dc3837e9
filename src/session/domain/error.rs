//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while building or using a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The user profile has no email address.
    #[error("user email must not be empty")]
    EmptyEmail,

    /// The action requires a signed-in user.
    #[error("sign in to continue")]
    NotAuthenticated,
}
