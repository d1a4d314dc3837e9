//! Wizard steps and their presentation metadata.

use super::{TaskDraft, WizardConfig, validation};
use serde::{Deserialize, Serialize};

/// Number of steps in the task-posting wizard.
pub const TOTAL_STEPS: usize = 4;

/// One step of the task-posting wizard, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Title and target date.
    #[default]
    TitleAndDate,
    /// In-person or online, with ZIP code.
    Location,
    /// Free-text details.
    Details,
    /// Budget offered.
    Budget,
}

impl WizardStep {
    /// All steps in display order.
    pub const ALL: [Self; TOTAL_STEPS] =
        [Self::TitleAndDate, Self::Location, Self::Details, Self::Budget];

    /// Returns the zero-based position of the step.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TitleAndDate => 0,
            Self::Location => 1,
            Self::Details => 2,
            Self::Budget => 3,
        }
    }

    /// Returns the step at `index`, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TitleAndDate),
            1 => Some(Self::Location),
            2 => Some(Self::Details),
            3 => Some(Self::Budget),
            _ => None,
        }
    }

    /// Returns the following step, or `None` on the last step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the preceding step, or `None` on the first step.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index),
            None => None,
        }
    }

    /// Returns `true` for the budget step, where forward means submit.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Budget)
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TitleAndDate => "Title & Date",
            Self::Location => "Location",
            Self::Details => "Details",
            Self::Budget => "Budget",
        }
    }

    /// Returns the panel heading shown above the step's fields.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::TitleAndDate => "What's your task?",
            Self::Location => "Where should it be done?",
            Self::Details => "Provide more details",
            Self::Budget => "Set your budget",
        }
    }

    /// Runs this step's validator against the draft.
    #[must_use]
    pub fn is_complete(self, draft: &TaskDraft, config: &WizardConfig) -> bool {
        match self {
            Self::TitleAndDate => validation::title_and_date_complete(draft),
            Self::Location => validation::location_complete(draft),
            Self::Details => validation::details_complete(draft),
            Self::Budget => validation::budget_complete(draft, config),
        }
    }
}
