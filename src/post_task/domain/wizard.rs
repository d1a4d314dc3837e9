//! Step sequencer and submission guard for the task-posting wizard.

use super::{
    LocationMode, TaskDraft, TaskReference, TaskSubmission, WizardConfig, WizardStep,
};
use chrono::NaiveDate;
use tracing::debug;

/// Whether a submission is currently awaiting the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    /// No submission is outstanding.
    #[default]
    Idle,
    /// A submission has been handed off and not yet resolved.
    Submitting,
}

/// Result of a forward request on the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum StepTransition {
    /// The active step is incomplete or a submission is outstanding.
    Blocked,
    /// The wizard moved to the given step.
    Moved(WizardStep),
    /// The last step is complete; the snapshot must be sent to the API.
    Submit(TaskSubmission),
}

/// Multi-step wizard that assembles and submits a [`TaskDraft`].
///
/// Field edits and step changes are synchronous. The only asynchronous hop
/// is the submission itself, which callers drive with [`Self::advance`] and
/// resolve with [`Self::complete_submission`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostTaskWizard {
    active_step: WizardStep,
    draft: TaskDraft,
    config: WizardConfig,
    status: SubmissionStatus,
    last_error: Option<String>,
}

impl PostTaskWizard {
    /// Creates a wizard on the first step with an empty draft.
    #[must_use]
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a wizard whose title is prefilled, as when the poster arrives
    /// with a title typed on another page.
    #[must_use]
    pub fn with_title(config: WizardConfig, title: impl Into<String>) -> Self {
        Self {
            draft: TaskDraft::with_title(title),
            ..Self::new(config)
        }
    }

    /// Returns the active step.
    #[must_use]
    pub const fn active_step(&self) -> WizardStep {
        self.active_step
    }

    /// Returns the draft under construction.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the wizard configuration.
    #[must_use]
    pub const fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Returns the submission status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns `true` while a submission is outstanding.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Returns the message of the last failed submission, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` when the active step's validator passes.
    #[must_use]
    pub fn is_step_complete(&self) -> bool {
        self.active_step.is_complete(&self.draft, &self.config)
    }

    /// Returns `true` when the forward control should be enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_submitting() && self.is_step_complete()
    }

    /// Returns `true` when the back control should be enabled.
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        self.active_step.previous().is_some()
    }

    /// Returns the caption of the forward control.
    #[must_use]
    pub const fn forward_label(&self) -> &'static str {
        if self.active_step.is_last() {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Requests the next step.
    ///
    /// Refuses silently when the active step is incomplete or a submission
    /// is outstanding. On the last step a complete draft yields
    /// [`StepTransition::Submit`] and the wizard enters
    /// [`SubmissionStatus::Submitting`] until
    /// [`Self::complete_submission`] is called.
    pub fn advance(&mut self) -> StepTransition {
        if !self.can_advance() {
            debug!(step = self.active_step.label(), "forward transition blocked");
            return StepTransition::Blocked;
        }

        if let Some(next) = self.active_step.next() {
            self.active_step = next;
            debug!(step = next.label(), "advanced wizard step");
            return StepTransition::Moved(next);
        }

        match TaskSubmission::from_draft(&self.draft, &self.config) {
            Ok(submission) => {
                self.status = SubmissionStatus::Submitting;
                self.last_error = None;
                debug!("task draft handed to submission");
                StepTransition::Submit(submission)
            }
            Err(err) => {
                debug!(error = %err, "submission snapshot rejected");
                StepTransition::Blocked
            }
        }
    }

    /// Moves back one step. Field values are never touched.
    ///
    /// Returns the new active step, or `None` on the first step.
    pub fn retreat(&mut self) -> Option<WizardStep> {
        let previous = self.active_step.previous()?;
        self.active_step = previous;
        debug!(step = previous.label(), "retreated wizard step");
        Some(previous)
    }

    /// Resolves an outstanding submission.
    ///
    /// Success resets the wizard to its initial state. Failure keeps the
    /// active step and every field, and records `message` for display.
    /// Calls without an outstanding submission are ignored.
    pub fn complete_submission(&mut self, result: Result<TaskReference, String>) {
        if !self.is_submitting() {
            debug!("ignoring submission result with nothing outstanding");
            return;
        }
        match result {
            Ok(_) => self.reset(),
            Err(message) => {
                self.status = SubmissionStatus::Idle;
                self.last_error = Some(message);
            }
        }
    }

    /// Gives up on an outstanding submission whose result will never
    /// arrive, for instance because the host dropped the request.
    ///
    /// The wizard stays on its step with every field intact and the forward
    /// control is released. Does nothing when no submission is outstanding.
    pub fn abandon_submission(&mut self) {
        if self.is_submitting() {
            self.status = SubmissionStatus::Idle;
            debug!("outstanding submission abandoned");
        }
    }

    /// Returns the wizard to step one with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Picks or clears an exact date. Picking a date clears flexibility.
    pub fn set_target_date(&mut self, date: Option<NaiveDate>) {
        self.draft.set_target_date(date);
    }

    /// Sets or clears the flexible marker. Setting it clears any date.
    pub fn set_flexible_date(&mut self, flexible: bool) {
        self.draft.set_flexible_date(flexible);
    }

    /// Flips the flexible marker.
    pub fn toggle_flexible_date(&mut self) {
        self.draft.toggle_flexible_date();
    }

    /// Selects a location mode.
    pub fn set_location_mode(&mut self, mode: LocationMode) {
        self.draft.set_location_mode(mode);
    }

    /// Replaces the ZIP code of an in-person task.
    ///
    /// Edits outside in-person mode are ignored.
    pub fn set_zip_code(&mut self, zip_code: impl Into<String>) {
        if !self.draft.set_zip_code(zip_code) {
            debug!(
                mode = self.draft.location_mode().as_str(),
                "ignoring ZIP code outside in-person mode"
            );
        }
    }

    /// Replaces the details.
    pub fn set_details(&mut self, details: impl Into<String>) {
        self.draft.set_details(details);
    }

    /// Replaces the budget text.
    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.draft.set_budget(budget);
    }
}
