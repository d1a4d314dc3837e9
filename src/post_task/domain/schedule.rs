//! When a posted task should be done.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling choice for a task draft.
///
/// An exact date and the flexible marker share one slot, so a draft can
/// never carry both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "date", rename_all = "snake_case")]
pub enum TaskSchedule {
    /// Nothing chosen yet.
    #[default]
    Unset,
    /// The task must be done on the given date.
    ExactDate(NaiveDate),
    /// The poster is flexible about the date.
    Flexible,
}

impl TaskSchedule {
    /// Returns the exact target date, if one is chosen.
    #[must_use]
    pub const fn target_date(self) -> Option<NaiveDate> {
        match self {
            Self::ExactDate(date) => Some(date),
            Self::Unset | Self::Flexible => None,
        }
    }

    /// Returns `true` when the poster marked the date as flexible.
    #[must_use]
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flexible)
    }

    /// Returns `true` when either an exact date or flexibility is chosen.
    #[must_use]
    pub const fn is_chosen(self) -> bool {
        !matches!(self, Self::Unset)
    }
}
