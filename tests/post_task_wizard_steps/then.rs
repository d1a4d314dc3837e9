//! Then steps for task-posting wizard BDD scenarios.

use super::world::PostTaskWorld;
use fixflex::post_task::{
    domain::{PostTaskWizard, WizardConfig, WizardStep},
    services::WizardProgress,
};
use rstest_bdd_macros::then;

#[then(r#"the task API received "{title}" with budget "{budget}""#)]
fn api_received(world: &PostTaskWorld, title: String, budget: String) -> Result<(), eyre::Report> {
    let expected_budget: f64 = budget
        .parse()
        .map_err(|err| eyre::eyre!("invalid expected budget in scenario: {err}"))?;
    let created = world
        .api
        .created()
        .map_err(|err| eyre::eyre!("read created tasks: {err}"))?;
    let [(reference, submission)] = created.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one created task, found {}",
            created.len()
        ));
    };

    eyre::ensure!(submission.title() == title, "title mismatch");
    eyre::ensure!(
        submission.budget().value().to_bits() == expected_budget.to_bits(),
        "budget mismatch: {}",
        submission.budget()
    );
    eyre::ensure!(
        world.last_progress == Some(WizardProgress::Submitted(reference.clone())),
        "expected a submitted outcome, got {:?}",
        world.last_progress
    );
    Ok(())
}

#[then("the task API received nothing")]
fn api_received_nothing(world: &PostTaskWorld) -> Result<(), eyre::Report> {
    let created = world
        .api
        .created()
        .map_err(|err| eyre::eyre!("read created tasks: {err}"))?;
    eyre::ensure!(created.is_empty(), "expected no created tasks");
    Ok(())
}

#[then("the wizard is back on the first step with an empty draft")]
fn wizard_reset(world: &PostTaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.wizard == PostTaskWizard::new(WizardConfig::default()),
        "wizard was not reset: {:?}",
        world.wizard
    );
    Ok(())
}

#[then("the active step is {index:u64}")]
fn active_step_is(world: &PostTaskWorld, index: u64) -> Result<(), eyre::Report> {
    let expected = usize::try_from(index)
        .ok()
        .and_then(WizardStep::from_index)
        .ok_or_else(|| eyre::eyre!("invalid step index in scenario: {index}"))?;
    eyre::ensure!(
        world.wizard.active_step() == expected,
        "expected step {expected:?}, found {:?}",
        world.wizard.active_step()
    );
    Ok(())
}

#[then(r#"the failure message is "{message}""#)]
fn failure_message_is(world: &PostTaskWorld, message: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.wizard.last_error() == Some(message.as_str()),
        "expected failure message {message:?}, found {:?}",
        world.wizard.last_error()
    );
    eyre::ensure!(
        world.last_progress == Some(WizardProgress::Failed(message.clone())),
        "expected a failed outcome, got {:?}",
        world.last_progress
    );
    Ok(())
}

#[then(r#"the draft still has title "{title}""#)]
fn draft_still_has_title(world: &PostTaskWorld, title: String) -> Result<(), eyre::Report> {
    let draft = world.wizard.draft();
    eyre::ensure!(draft.title() == title, "title changed to {:?}", draft.title());
    Ok(())
}

#[then("the date is still flexible")]
fn date_still_flexible(world: &PostTaskWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.wizard.draft().is_flexible_date(),
        "flexible marker was lost"
    );
    Ok(())
}

#[then(r#"the draft budget is "{budget}""#)]
fn draft_budget_is(world: &PostTaskWorld, budget: String) -> Result<(), eyre::Report> {
    let draft = world.wizard.draft();
    eyre::ensure!(draft.budget() == budget, "budget changed to {:?}", draft.budget());
    Ok(())
}
