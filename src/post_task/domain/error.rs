//! Error types for task-posting domain validation and parsing.

use super::WizardStep;
use thiserror::Error;

/// Errors returned while constructing task-posting domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTaskDomainError {
    /// A submission was requested while a wizard step is still incomplete.
    #[error("step '{}' is incomplete", .0.label())]
    IncompleteStep(WizardStep),

    /// The budget text is not a positive finite amount.
    #[error("invalid budget '{0}', expected a positive amount")]
    InvalidBudget(String),

    /// The budget exceeds the configured maximum.
    #[error("budget '{0}' exceeds the configured maximum")]
    BudgetTooLarge(String),

    /// The budget carries more decimal places than allowed.
    #[error("budget '{0}' has too many decimal places")]
    BudgetTooPrecise(String),

    /// The created task reference returned by the API was empty.
    #[error("task reference must not be empty")]
    EmptyTaskReference,
}

/// Error returned while parsing location modes from wire values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown location mode: {0}")]
pub struct ParseLocationModeError(pub String);
