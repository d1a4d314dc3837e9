//! Signed-in user profile.

use super::SessionDomainError;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by the signup and login
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier, when the server supplied one.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserProfile {
    /// Creates a profile with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyEmail`] when the email is blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let raw_email = email.into();
        let email_trimmed = raw_email.trim();
        if email_trimmed.is_empty() {
            return Err(SessionDomainError::EmptyEmail);
        }
        Ok(Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email_trimmed.to_owned(),
            phone: None,
            address: None,
        })
    }

    /// Returns "First Last", skipping blank parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
