//! Domain model for the task-posting wizard.
//!
//! The draft, its step validators and the wizard state machine are pure
//! values; talking to the marketplace API happens through [`super::ports`].

mod budget;
mod config;
mod draft;
mod error;
mod ids;
mod location;
mod schedule;
mod step;
mod submission;
pub mod validation;
mod wizard;

pub use budget::Budget;
pub use config::WizardConfig;
pub use draft::TaskDraft;
pub use error::{ParseLocationModeError, PostTaskDomainError};
pub use ids::TaskReference;
pub use location::{LocationMode, TaskLocation};
pub use schedule::TaskSchedule;
pub use step::{TOTAL_STEPS, WizardStep};
pub use submission::{SubmittedLocation, SubmittedSchedule, TaskSubmission};
pub use wizard::{PostTaskWizard, StepTransition, SubmissionStatus};
