//! Field store for the task under construction.

use super::{LocationMode, TaskLocation, TaskSchedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// In-progress task assembled by the posting wizard.
///
/// Every field holds exactly what the poster typed; trimming and parsing
/// happen in the step validators and when the submission snapshot is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    schedule: TaskSchedule,
    location: TaskLocation,
    details: String,
    budget: String,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft whose title is already filled in.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns the title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the scheduling choice.
    #[must_use]
    pub const fn schedule(&self) -> TaskSchedule {
        self.schedule
    }

    /// Returns the exact target date, if one is chosen.
    #[must_use]
    pub const fn target_date(&self) -> Option<NaiveDate> {
        self.schedule.target_date()
    }

    /// Returns `true` when the date is marked flexible.
    #[must_use]
    pub const fn is_flexible_date(&self) -> bool {
        self.schedule.is_flexible()
    }

    /// Returns the location choice.
    #[must_use]
    pub const fn location(&self) -> &TaskLocation {
        &self.location
    }

    /// Returns the selected location mode.
    #[must_use]
    pub const fn location_mode(&self) -> LocationMode {
        self.location.mode()
    }

    /// Returns the ZIP code, empty unless the task is in person.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        self.location.zip_code()
    }

    /// Returns the details as typed.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the budget text as typed.
    #[must_use]
    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Picks or clears an exact date.
    ///
    /// Picking a date clears the flexible marker. Clearing the date leaves a
    /// flexible marker untouched.
    pub const fn set_target_date(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(date) => self.schedule = TaskSchedule::ExactDate(date),
            None => {
                if matches!(self.schedule, TaskSchedule::ExactDate(_)) {
                    self.schedule = TaskSchedule::Unset;
                }
            }
        }
    }

    /// Sets or clears the flexible marker.
    ///
    /// Marking the date flexible clears any exact date. Unmarking never
    /// brings a previous date back.
    pub const fn set_flexible_date(&mut self, flexible: bool) {
        if flexible {
            self.schedule = TaskSchedule::Flexible;
        } else if self.schedule.is_flexible() {
            self.schedule = TaskSchedule::Unset;
        }
    }

    /// Flips the flexible marker, as the "I'm flexible" button does.
    pub const fn toggle_flexible_date(&mut self) {
        let flexible = !self.schedule.is_flexible();
        self.set_flexible_date(flexible);
    }

    /// Selects a location mode.
    ///
    /// Re-selecting in-person keeps the ZIP code already entered; any other
    /// change starts from an empty ZIP code.
    pub fn set_location_mode(&mut self, mode: LocationMode) {
        if self.location.mode() == mode {
            return;
        }
        self.location = match mode {
            LocationMode::Unset => TaskLocation::Unset,
            LocationMode::InPerson => TaskLocation::InPerson {
                zip_code: String::new(),
            },
            LocationMode::Online => TaskLocation::Online,
        };
    }

    /// Replaces the ZIP code.
    ///
    /// Returns `false` and leaves the draft untouched when the location is
    /// not in person, since no ZIP field exists in that mode.
    pub fn set_zip_code(&mut self, zip: impl Into<String>) -> bool {
        match &mut self.location {
            TaskLocation::InPerson { zip_code } => {
                *zip_code = zip.into();
                true
            }
            TaskLocation::Unset | TaskLocation::Online => false,
        }
    }

    /// Replaces the details.
    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// Replaces the budget text.
    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = budget.into();
    }
}
