//! Behaviour tests for the task-posting wizard.

#[path = "post_task_wizard_steps/mod.rs"]
mod post_task_wizard_steps_defs;

use post_task_wizard_steps_defs::world::{PostTaskWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/post_task_wizard.feature",
    name = "Post a flexible online task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn post_flexible_online_task(world: PostTaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/post_task_wizard.feature",
    name = "Refuse to submit a non-numeric budget"
)]
#[tokio::test(flavor = "multi_thread")]
async fn refuse_non_numeric_budget(world: PostTaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/post_task_wizard.feature",
    name = "Keep the draft when the API rejects the task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn keep_draft_on_rejection(world: PostTaskWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/post_task_wizard.feature",
    name = "Going back keeps what was typed"
)]
#[tokio::test(flavor = "multi_thread")]
async fn going_back_keeps_fields(world: PostTaskWorld) {
    let _ = world;
}
