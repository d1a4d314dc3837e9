//! Completeness predicates for each wizard step.
//!
//! Every predicate is a pure function of the draft and may be re-run on each
//! keystroke.

use super::{Budget, TaskDraft, TaskLocation, WizardConfig};

/// Title is non-blank and either a date is picked or the date is flexible.
#[must_use]
pub fn title_and_date_complete(draft: &TaskDraft) -> bool {
    is_filled(draft.title()) && draft.schedule().is_chosen()
}

/// A mode is selected, and in-person tasks carry a non-blank ZIP code.
#[must_use]
pub fn location_complete(draft: &TaskDraft) -> bool {
    match draft.location() {
        TaskLocation::Unset => false,
        TaskLocation::InPerson { zip_code } => is_filled(zip_code),
        TaskLocation::Online => true,
    }
}

/// Details are non-blank.
#[must_use]
pub fn details_complete(draft: &TaskDraft) -> bool {
    is_filled(draft.details())
}

/// Budget parses to a positive finite amount within `config` bounds.
#[must_use]
pub fn budget_complete(draft: &TaskDraft, config: &WizardConfig) -> bool {
    Budget::parse(draft.budget(), config).is_ok()
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
