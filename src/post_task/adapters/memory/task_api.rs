//! In-memory task-creation API for tests and offline hosts.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::post_task::{
    domain::{TaskReference, TaskSubmission},
    ports::{TaskApiError, TaskApiResult, TaskCreationApi},
};

/// Thread-safe in-memory task-creation API.
///
/// Accepted submissions are recorded in order. Failures queued with
/// [`Self::fail_next`] are returned, one per call, before any further
/// submission is accepted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<InMemoryTaskApiState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskApiState {
    created: Vec<(TaskReference, TaskSubmission)>,
    queued_failures: VecDeque<TaskApiError>,
}

impl InMemoryTaskApi {
    /// Creates an API with no recorded tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a failure for the next call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the internal lock is
    /// poisoned.
    pub fn fail_next(&self, error: TaskApiError) -> TaskApiResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskApiError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.queued_failures.push_back(error);
        Ok(())
    }

    /// Returns every accepted submission with its assigned reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the internal lock is
    /// poisoned.
    pub fn created(&self) -> TaskApiResult<Vec<(TaskReference, TaskSubmission)>> {
        let state = self.state.read().map_err(|err| {
            TaskApiError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.created.clone())
    }
}

#[async_trait]
impl TaskCreationApi for InMemoryTaskApi {
    async fn create_task(&self, submission: &TaskSubmission) -> TaskApiResult<TaskReference> {
        let mut state = self.state.write().map_err(|err| {
            TaskApiError::transport(std::io::Error::other(err.to_string()))
        })?;
        if let Some(failure) = state.queued_failures.pop_front() {
            return Err(failure);
        }

        let reference = TaskReference::from_uuid(Uuid::new_v4());
        state.created.push((reference.clone(), submission.clone()));
        Ok(reference)
    }
}
