//! Port for the marketplace's task-creation endpoint.

use crate::post_task::domain::{TaskReference, TaskSubmission};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Message shown when the API gives no usable explanation.
pub const FALLBACK_FAILURE_MESSAGE: &str = "An error occurred while posting your task.";

/// Result type for task-creation API calls.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Task-creation contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCreationApi: Send + Sync {
    /// Creates a task from a completed submission.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Rejected`] when the server refuses the payload
    /// or [`TaskApiError::Transport`] when the request could not complete.
    async fn create_task(&self, submission: &TaskSubmission) -> TaskApiResult<TaskReference>;
}

/// A single validation message returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFieldError {
    /// Offending request field, when the server names one.
    #[serde(rename = "param", default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable explanation.
    #[serde(rename = "msg")]
    pub message: String,
}

impl ApiFieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: Option<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiFieldError>,
}

/// Errors returned by task-creation API implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskApiError {
    /// The server rejected the submission.
    #[error("task rejected by server ({} error(s))", .0.len())]
    Rejected(Vec<ApiFieldError>),

    /// The request failed before the server could answer.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Builds a rejection from a JSON error body of the form
    /// `{"errors": [{"msg": "...", "param": "..."}]}`.
    ///
    /// A body that cannot be decoded becomes a transport error.
    #[must_use]
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Rejected(parsed.errors),
            Err(err) => Self::transport(err),
        }
    }

    /// Returns the text shown to the poster.
    ///
    /// Uses the first server message for rejections and the error text for
    /// transport failures, falling back to a generic message when either is
    /// blank.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Rejected(errors) => errors
                .first()
                .map(|error| error.message.trim().to_owned())
                .unwrap_or_default(),
            Self::Transport(err) => err.to_string().trim().to_owned(),
        };
        if message.is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_owned()
        } else {
            message
        }
    }
}
