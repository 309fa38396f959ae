//! Tests for the sprint end and task sprint rules.

use super::support::{day, sprint_ending, task_in, today};
use crate::board::{
    domain::{Sprint, SprintFields, TaskStatus},
    validation::{
        Field, FieldRejection, RejectionReason, ValidationRejection, validate_sprint_end,
        validate_task_sprint,
    },
};
use chrono::{Days, NaiveDate};
use rstest::rstest;

fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Days::new(1)
}

fn tomorrow(today: NaiveDate) -> NaiveDate {
    today + Days::new(1)
}

fn rejected(field: Field, reason: RejectionReason) -> FieldRejection {
    FieldRejection::new(field, reason)
}

#[rstest]
#[case(-30, false)]
#[case(-1, false)]
#[case(0, true)]
#[case(1, true)]
#[case(90, true)]
fn new_sprint_is_accepted_iff_end_is_not_before_today(
    today: NaiveDate,
    #[case] offset_days: i64,
    #[case] accepted: bool,
) {
    let end = today + chrono::Duration::days(offset_days);
    let result = validate_sprint_end(end, None, today);

    if accepted {
        assert_eq!(result, Ok(end));
    } else {
        assert_eq!(
            result,
            Err(rejected(Field::End, RejectionReason::EndDateInPast))
        );
    }
}

#[rstest]
#[case(day(2020, 1, 1))]
#[case(day(2024, 5, 9))]
#[case(day(2024, 5, 10))]
#[case(day(2025, 1, 1))]
fn unchanged_end_is_accepted_whether_past_or_not(today: NaiveDate, #[case] end: NaiveDate) {
    let stored = sprint_ending(end);
    assert_eq!(validate_sprint_end(end, Some(&stored), today), Ok(end));
}

#[rstest]
#[case(day(2024, 5, 20))]
#[case(day(2020, 1, 1))]
fn changing_end_into_the_past_is_rejected(today: NaiveDate, #[case] stored_end: NaiveDate) {
    let stored = sprint_ending(stored_end);
    let proposed = yesterday(today);

    assert_eq!(
        validate_sprint_end(proposed, Some(&stored), today),
        Err(rejected(Field::End, RejectionReason::EndDateInPast))
    );
}

#[rstest]
fn legacy_past_sprint_scenario(today: NaiveDate) {
    let legacy = sprint_ending(day(2020, 1, 1));

    assert!(validate_sprint_end(day(2020, 1, 1), Some(&legacy), today).is_ok());
    assert!(validate_sprint_end(day(2020, 1, 2), Some(&legacy), today).is_err());
    assert!(validate_sprint_end(tomorrow(today), Some(&legacy), today).is_ok());
}

#[rstest]
fn new_backlog_task_is_accepted(today: NaiveDate) {
    assert_eq!(validate_task_sprint(None, None, today), Ok(None));
}

#[rstest]
#[case(-1, false)]
#[case(0, true)]
#[case(7, true)]
fn new_task_in_sprint_is_accepted_iff_sprint_has_not_ended(
    today: NaiveDate,
    #[case] offset_days: i64,
    #[case] accepted: bool,
) {
    let sprint = sprint_ending(today + chrono::Duration::days(offset_days));
    let result = validate_task_sprint(Some(&sprint), None, today);

    if accepted {
        assert_eq!(result, Ok(Some(&sprint)));
    } else {
        assert_eq!(
            result,
            Err(rejected(Field::Sprint, RejectionReason::AddToPastSprint))
        );
    }
}

#[rstest]
#[case(Some(-5))]
#[case(Some(0))]
#[case(Some(14))]
#[case(None)]
fn done_task_cannot_change_sprint(today: NaiveDate, #[case] target_offset: Option<i64>) {
    let current = sprint_ending(tomorrow(today));
    let task = task_in(Some(&current), TaskStatus::Done);
    let target: Option<Sprint> =
        target_offset.map(|offset| sprint_ending(today + chrono::Duration::days(offset)));

    assert_eq!(
        validate_task_sprint(target.as_ref(), Some(&task), today),
        Err(rejected(
            Field::Sprint,
            RejectionReason::CompletedTaskSprintChange
        ))
    );
}

#[rstest]
fn done_backlog_task_cannot_be_scheduled(today: NaiveDate) {
    let task = task_in(None, TaskStatus::Done);
    let target = sprint_ending(tomorrow(today));

    assert_eq!(
        validate_task_sprint(Some(&target), Some(&task), today),
        Err(rejected(
            Field::Sprint,
            RejectionReason::CompletedTaskSprintChange
        ))
    );
}

#[rstest]
#[case(TaskStatus::NotStarted)]
#[case(TaskStatus::Started)]
fn open_task_cannot_move_into_ended_sprint(today: NaiveDate, #[case] status: TaskStatus) {
    let current = sprint_ending(tomorrow(today));
    let task = task_in(Some(&current), status);
    let ended = sprint_ending(yesterday(today));

    assert_eq!(
        validate_task_sprint(Some(&ended), Some(&task), today),
        Err(rejected(Field::Sprint, RejectionReason::AssignToPastSprint))
    );
}

#[rstest]
#[case(TaskStatus::NotStarted, Some(0))]
#[case(TaskStatus::Started, Some(3))]
#[case(TaskStatus::Started, None)]
#[case(TaskStatus::NotStarted, None)]
fn open_task_can_move_to_backlog_or_current_sprint(
    today: NaiveDate,
    #[case] status: TaskStatus,
    #[case] target_offset: Option<i64>,
) {
    let current = sprint_ending(tomorrow(today));
    let task = task_in(Some(&current), status);
    let target: Option<Sprint> =
        target_offset.map(|offset| sprint_ending(today + chrono::Duration::days(offset)));

    assert_eq!(
        validate_task_sprint(target.as_ref(), Some(&task), today),
        Ok(target.as_ref())
    );
}

#[rstest]
#[case(TaskStatus::Done)]
#[case(TaskStatus::Started)]
fn unchanged_sprint_is_accepted_even_when_sprint_has_ended(
    today: NaiveDate,
    #[case] status: TaskStatus,
) {
    let ended = sprint_ending(day(2020, 1, 1));
    let task = task_in(Some(&ended), status);

    assert_eq!(
        validate_task_sprint(Some(&ended), Some(&task), today),
        Ok(Some(&ended))
    );
}

#[rstest]
fn unchanged_backlog_is_accepted_for_done_task(today: NaiveDate) {
    let task = task_in(None, TaskStatus::Done);
    assert_eq!(validate_task_sprint(None, Some(&task), today), Ok(None));
}

#[rstest]
fn sprint_comparison_uses_identity_not_dates(today: NaiveDate) {
    let current = sprint_ending(tomorrow(today));
    let task = task_in(Some(&current), TaskStatus::Done);
    let lookalike = Sprint::new(SprintFields::new(current.name().clone(), current.end()));

    assert!(validate_task_sprint(Some(&lookalike), Some(&task), today).is_err());
}

#[rstest]
fn rejection_serializes_as_field_message_list() {
    let rejection = ValidationRejection::from(rejected(
        Field::Sprint,
        RejectionReason::AddToPastSprint,
    ));
    let value = serde_json::to_value(&rejection).expect("serializable rejection");

    assert_eq!(
        value,
        serde_json::json!({ "sprint": ["Cannot add tasks to past sprints."] })
    );
    assert_eq!(
        rejection.to_string(),
        "sprint: Cannot add tasks to past sprints."
    );
}

#[rstest]
fn rejection_groups_messages_by_field_in_check_order() {
    let rejection = ValidationRejection::from(rejected(Field::Name, RejectionReason::BlankName))
        .with(rejected(Field::End, RejectionReason::EndDateInPast))
        .with(rejected(
            Field::Name,
            RejectionReason::NameTooLong { max: 100 },
        ));

    assert_eq!(rejection.fields(), vec![Field::Name, Field::End]);
    assert_eq!(
        serde_json::to_value(&rejection).expect("serializable rejection"),
        serde_json::json!({
            "name": [
                "This field may not be blank.",
                "Ensure this field has no more than 100 characters.",
            ],
            "end": ["End date cannot be in the past."],
        })
    );
    assert_eq!(
        rejection.to_string(),
        "name: This field may not be blank.; end: End date cannot be in the past.; \
         name: Ensure this field has no more than 100 characters."
    );
}

#[rstest]
#[case(RejectionReason::EndDateInPast, "End date cannot be in the past.")]
#[case(
    RejectionReason::CompletedTaskSprintChange,
    "Cannot change the sprint of a completed task."
)]
#[case(RejectionReason::AssignToPastSprint, "Cannot assign tasks to past sprints.")]
#[case(RejectionReason::AddToPastSprint, "Cannot add tasks to past sprints.")]
fn rejection_messages_match_board_wording(
    #[case] reason: RejectionReason,
    #[case] expected: &str,
) {
    assert_eq!(reason.to_string(), expected);
}
