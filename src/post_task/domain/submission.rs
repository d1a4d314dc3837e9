//! Snapshot of a completed draft, as handed to the task-creation API.

use super::{Budget, PostTaskDomainError, TaskDraft, TaskLocation, TaskSchedule, WizardConfig, WizardStep};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// When the submitted task should be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmittedSchedule {
    /// On an exact date.
    ExactDate(NaiveDate),
    /// Whenever suits the Flexer.
    Flexible,
}

/// Where the submitted task should be done.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubmittedLocation {
    /// In person at the given ZIP code.
    InPerson {
        /// Trimmed ZIP code.
        zip_code: String,
    },
    /// Remotely.
    Online,
}

/// Immutable task payload assembled from a complete draft.
///
/// Serialises to the camelCase shape the marketplace API expects, carrying
/// exactly one of `targetDate` or `flexible: true` and a `zipCode` only for
/// in-person tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSubmission {
    title: String,
    schedule: SubmittedSchedule,
    location: SubmittedLocation,
    details: String,
    budget: Budget,
}

impl TaskSubmission {
    /// Builds a submission from a draft, re-checking every step.
    ///
    /// # Errors
    ///
    /// Returns [`PostTaskDomainError::IncompleteStep`] naming the first step
    /// whose validator fails.
    pub fn from_draft(draft: &TaskDraft, config: &WizardConfig) -> Result<Self, PostTaskDomainError> {
        if let Some(step) = WizardStep::ALL
            .into_iter()
            .find(|step| !step.is_complete(draft, config))
        {
            return Err(PostTaskDomainError::IncompleteStep(step));
        }

        let schedule = match draft.schedule() {
            TaskSchedule::ExactDate(date) => SubmittedSchedule::ExactDate(date),
            TaskSchedule::Flexible => SubmittedSchedule::Flexible,
            TaskSchedule::Unset => {
                return Err(PostTaskDomainError::IncompleteStep(WizardStep::TitleAndDate));
            }
        };
        let location = match draft.location() {
            TaskLocation::InPerson { zip_code } => SubmittedLocation::InPerson {
                zip_code: zip_code.trim().to_owned(),
            },
            TaskLocation::Online => SubmittedLocation::Online,
            TaskLocation::Unset => {
                return Err(PostTaskDomainError::IncompleteStep(WizardStep::Location));
            }
        };

        Ok(Self {
            title: draft.title().trim().to_owned(),
            schedule,
            location,
            details: draft.details().trim().to_owned(),
            budget: Budget::parse(draft.budget(), config)?,
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the schedule.
    #[must_use]
    pub const fn schedule(&self) -> SubmittedSchedule {
        self.schedule
    }

    /// Returns the location.
    #[must_use]
    pub const fn location(&self) -> &SubmittedLocation {
        &self.location
    }

    /// Returns the trimmed details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the parsed budget.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }
}

impl Serialize for TaskSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let zip_code = match &self.location {
            SubmittedLocation::InPerson { zip_code } => Some(zip_code),
            SubmittedLocation::Online => None,
        };
        let len = 5 + usize::from(zip_code.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("title", &self.title)?;
        match self.schedule {
            SubmittedSchedule::ExactDate(date) => map.serialize_entry("targetDate", &date)?,
            SubmittedSchedule::Flexible => map.serialize_entry("flexible", &true)?,
        }
        match zip_code {
            Some(zip_code) => {
                map.serialize_entry("locationMode", "in-person")?;
                map.serialize_entry("zipCode", zip_code)?;
            }
            None => map.serialize_entry("locationMode", "online")?,
        }
        map.serialize_entry("details", &self.details)?;
        map.serialize_entry("budget", &self.budget)?;
        map.end()
    }
}
