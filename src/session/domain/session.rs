//! Explicit client session context.

use super::{Category, SessionDomainError, UserProfile};
use crate::post_task::domain::{PostTaskWizard, WizardConfig};

/// Client-wide state passed explicitly to the features that need it.
///
/// Holds the signed-in user, if any, and the category catalogue loaded at
/// start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
    categories: Vec<Category>,
}

impl Session {
    /// Creates a session with nobody signed in and no categories.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Returns `true` when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the category catalogue.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by backend identifier.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Records the signed-in user.
    pub fn sign_in(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Forgets the signed-in user. Categories are kept.
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Replaces the category catalogue.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Opens the task-posting wizard, optionally with a prefilled title.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::NotAuthenticated`] when nobody is
    /// signed in.
    pub fn open_post_task(
        &self,
        config: WizardConfig,
        title: Option<&str>,
    ) -> Result<PostTaskWizard, SessionDomainError> {
        if !self.is_authenticated() {
            return Err(SessionDomainError::NotAuthenticated);
        }
        Ok(match title.map(str::trim).filter(|title| !title.is_empty()) {
            Some(title) => PostTaskWizard::with_title(config, title),
            None => PostTaskWizard::new(config),
        })
    }
}
