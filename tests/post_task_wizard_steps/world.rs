//! Shared world state for task-posting wizard BDD scenarios.

use std::sync::Arc;

use fixflex::post_task::{
    adapters::memory::InMemoryTaskApi,
    domain::{PostTaskWizard, WizardConfig},
    services::{PostTaskService, WizardProgress},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestPostTaskService = PostTaskService<InMemoryTaskApi>;

/// Scenario world for task-posting behaviour tests.
pub struct PostTaskWorld {
    pub api: InMemoryTaskApi,
    pub service: TestPostTaskService,
    pub wizard: PostTaskWizard,
    pub last_progress: Option<WizardProgress>,
}

impl PostTaskWorld {
    /// Creates a world with a fresh wizard and an empty API.
    #[must_use]
    pub fn new() -> Self {
        let api = InMemoryTaskApi::new();
        let service = PostTaskService::new(Arc::new(api.clone()));

        Self {
            api,
            service,
            wizard: PostTaskWizard::new(WizardConfig::default()),
            last_progress: None,
        }
    }
}

impl Default for PostTaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PostTaskWorld {
    PostTaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
