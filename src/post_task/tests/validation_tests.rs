//! Step validator tests.

use crate::post_task::domain::{
    Budget, LocationMode, PostTaskDomainError, TaskDraft, WizardConfig, WizardStep, validation,
};
use chrono::NaiveDate;
use rstest::rstest;

fn draft_with_budget(budget: &str) -> TaskDraft {
    let mut draft = TaskDraft::new();
    draft.set_budget(budget);
    draft
}

#[rstest]
#[case("0", false)]
#[case("-5", false)]
#[case("abc", false)]
#[case("12.50", true)]
#[case("  ", false)]
#[case("", false)]
#[case(" 50 ", true)]
#[case("12abc", false)]
#[case("NaN", false)]
#[case("inf", false)]
#[case("1e3", true)]
#[case("0.01", true)]
fn budget_step_completeness(#[case] budget: &str, #[case] expected: bool) {
    let draft = draft_with_budget(budget);
    assert_eq!(
        validation::budget_complete(&draft, &WizardConfig::default()),
        expected
    );
}

#[rstest]
fn non_numeric_budget_is_rejected_not_coerced() {
    let result = Budget::parse("abc", &WizardConfig::default());
    assert_eq!(
        result,
        Err(PostTaskDomainError::InvalidBudget("abc".to_owned()))
    );
}

#[rstest]
#[case("100000", true)]
#[case("100000.01", false)]
#[case("12.5", true)]
#[case("12.50", true)]
#[case("12.505", false)]
#[case("1.2555e1", false)]
#[case("1.25e1", true)]
fn strict_config_bounds_budget(#[case] budget: &str, #[case] expected: bool) {
    let draft = draft_with_budget(budget);
    assert_eq!(
        validation::budget_complete(&draft, &WizardConfig::strict()),
        expected
    );
}

#[rstest]
fn strict_config_reports_which_bound_failed() {
    let config = WizardConfig::strict();
    assert_eq!(
        Budget::parse("250000", &config),
        Err(PostTaskDomainError::BudgetTooLarge("250000".to_owned()))
    );
    assert_eq!(
        Budget::parse("9.999", &config),
        Err(PostTaskDomainError::BudgetTooPrecise("9.999".to_owned()))
    );
}

#[rstest]
#[case(LocationMode::Online, "", true)]
#[case(LocationMode::InPerson, "", false)]
#[case(LocationMode::InPerson, "   ", false)]
#[case(LocationMode::InPerson, "10001", true)]
#[case(LocationMode::Unset, "", false)]
fn location_step_completeness(
    #[case] mode: LocationMode,
    #[case] zip_code: &str,
    #[case] expected: bool,
) {
    let mut draft = TaskDraft::new();
    draft.set_location_mode(mode);
    draft.set_zip_code(zip_code);

    assert_eq!(validation::location_complete(&draft), expected);
}

#[rstest]
#[case("Move my sofa", true, true)]
#[case("Move my sofa", false, false)]
#[case("   ", true, false)]
#[case("", true, false)]
fn title_and_date_step_completeness(
    #[case] title: &str,
    #[case] flexible: bool,
    #[case] expected: bool,
) {
    let mut draft = TaskDraft::with_title(title);
    draft.set_flexible_date(flexible);

    assert_eq!(validation::title_and_date_complete(&draft), expected);
}

#[rstest]
fn title_and_date_step_accepts_exact_date() {
    let mut draft = TaskDraft::with_title("Paint the fence");
    draft.set_target_date(NaiveDate::from_ymd_opt(2026, 12, 1));

    assert!(validation::title_and_date_complete(&draft));
}

#[rstest]
#[case("Need help moving a sofa downstairs", true)]
#[case("\n\t ", false)]
fn details_step_completeness(#[case] details: &str, #[case] expected: bool) {
    let mut draft = TaskDraft::new();
    draft.set_details(details);

    assert_eq!(validation::details_complete(&draft), expected);
}

#[rstest]
fn validators_are_stable_across_repeated_evaluation() {
    let mut draft = TaskDraft::with_title("Move my sofa");
    draft.set_flexible_date(true);
    draft.set_budget("abc");
    let config = WizardConfig::default();
    let before = draft.clone();

    for step in WizardStep::ALL {
        let first = step.is_complete(&draft, &config);
        let second = step.is_complete(&draft, &config);
        assert_eq!(first, second);
    }
    assert_eq!(draft, before);
}
