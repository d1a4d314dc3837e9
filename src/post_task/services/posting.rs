//! Service layer driving the wizard's forward transition and submission.

use crate::post_task::{
    domain::{PostTaskWizard, StepTransition, TaskReference, TaskSubmission, WizardStep},
    ports::TaskCreationApi,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a forward request, as reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    /// Nothing happened: the active step is incomplete or a submission is
    /// outstanding.
    Blocked,
    /// The wizard moved to the given step.
    Moved(WizardStep),
    /// The task was created and the wizard has been reset. The host decides
    /// where to navigate next.
    Submitted(TaskReference),
    /// The API refused or could not be reached. The wizard kept every field
    /// and stays on the budget step.
    Failed(String),
}

/// Task-posting orchestration service.
#[derive(Clone)]
pub struct PostTaskService<A>
where
    A: TaskCreationApi,
{
    api: Arc<A>,
}

impl<A> PostTaskService<A>
where
    A: TaskCreationApi,
{
    /// Creates a new posting service.
    #[must_use]
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Handles the forward control of the wizard.
    ///
    /// On intermediate steps this is a plain step change. On the last step
    /// the completed draft is sent to the task-creation API and the result
    /// is applied to the wizard before returning.
    ///
    /// The wizard is marked as submitting before the API call is awaited.
    /// A host that drops the returned future and keeps the wizard must call
    /// [`PostTaskWizard::abandon_submission`] to release the forward control.
    pub async fn advance(&self, wizard: &mut PostTaskWizard) -> WizardProgress {
        match wizard.advance() {
            StepTransition::Blocked => WizardProgress::Blocked,
            StepTransition::Moved(step) => WizardProgress::Moved(step),
            StepTransition::Submit(submission) => self.submit(wizard, &submission).await,
        }
    }

    async fn submit(
        &self,
        wizard: &mut PostTaskWizard,
        submission: &TaskSubmission,
    ) -> WizardProgress {
        match self.api.create_task(submission).await {
            Ok(reference) => {
                info!(task = %reference, title = submission.title(), "task posted");
                wizard.complete_submission(Ok(reference.clone()));
                WizardProgress::Submitted(reference)
            }
            Err(err) => {
                let message = err.user_message();
                warn!(error = %err, "task submission failed");
                wizard.complete_submission(Err(message.clone()));
                WizardProgress::Failed(message)
            }
        }
    }
}
