//! Application services for task posting.

mod posting;

pub use posting::{PostTaskService, WizardProgress};
