//! When steps for task-posting wizard BDD scenarios.

use super::world::{PostTaskWorld, run_async};
use fixflex::post_task::domain::LocationMode;
use rstest_bdd_macros::when;

#[when(r#"the title is set to "{title}""#)]
fn set_title(world: &mut PostTaskWorld, title: String) {
    world.wizard.set_title(title);
}

#[when("the date is marked flexible")]
fn mark_flexible(world: &mut PostTaskWorld) {
    world.wizard.set_flexible_date(true);
}

#[when(r#"the location mode is set to "{mode}""#)]
fn set_location_mode(world: &mut PostTaskWorld, mode: String) -> Result<(), eyre::Report> {
    let parsed = LocationMode::try_from(mode.as_str())
        .map_err(|err| eyre::eyre!("invalid location mode in scenario: {err}"))?;
    world.wizard.set_location_mode(parsed);
    Ok(())
}

#[when(r#"the details are set to "{details}""#)]
fn set_details(world: &mut PostTaskWorld, details: String) {
    world.wizard.set_details(details);
}

#[when(r#"the budget is set to "{budget}""#)]
fn set_budget(world: &mut PostTaskWorld, budget: String) {
    world.wizard.set_budget(budget);
}

#[when("the poster presses forward")]
fn press_forward(world: &mut PostTaskWorld) {
    let progress = run_async(world.service.advance(&mut world.wizard));
    world.last_progress = Some(progress);
}

#[when("the poster presses back")]
fn press_back(world: &mut PostTaskWorld) {
    world.wizard.retreat();
}
