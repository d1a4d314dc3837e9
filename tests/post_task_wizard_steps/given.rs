//! Given steps for task-posting wizard BDD scenarios.

use super::world::{PostTaskWorld, run_async};
use fixflex::post_task::{
    domain::{LocationMode, PostTaskWizard, WizardConfig, WizardStep},
    ports::{ApiFieldError, TaskApiError},
};
use rstest_bdd_macros::given;

#[given("a fresh task-posting wizard")]
fn fresh_wizard(world: &mut PostTaskWorld) {
    world.wizard = PostTaskWizard::new(WizardConfig::default());
}

#[given("a task-posting wizard on the budget step")]
fn wizard_on_budget_step(world: &mut PostTaskWorld) -> Result<(), eyre::Report> {
    let mut wizard = PostTaskWizard::new(WizardConfig::default());
    wizard.set_title("Move my sofa");
    wizard.set_flexible_date(true);
    run_async(world.service.advance(&mut wizard));
    wizard.set_location_mode(LocationMode::Online);
    run_async(world.service.advance(&mut wizard));
    wizard.set_details("Need help moving a sofa downstairs");
    run_async(world.service.advance(&mut wizard));

    eyre::ensure!(
        wizard.active_step() == WizardStep::Budget,
        "expected to reach the budget step, stuck on {:?}",
        wizard.active_step()
    );
    world.wizard = wizard;
    Ok(())
}

#[given(r#"the task API rejects the next submission with "{message}""#)]
fn api_rejects_next(world: &mut PostTaskWorld, message: String) -> Result<(), eyre::Report> {
    world
        .api
        .fail_next(TaskApiError::Rejected(vec![ApiFieldError::new(None, message)]))
        .map_err(|err| eyre::eyre!("queue rejection: {err}"))
}
