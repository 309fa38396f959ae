//! Date and status rules applied to proposed sprint and task writes.
//!
//! Each rule is a pure function of the proposed value, the stored record
//! (`None` when creating) and today's date. Rules return the accepted value
//! unchanged or a [`FieldRejection`] tied to the offending field.

use super::{Field, FieldRejection, RejectionReason};
use crate::board::domain::{Sprint, Task};
use chrono::NaiveDate;

/// Validates a proposed sprint end date.
///
/// A past end date is rejected when the sprint is new or the end date is
/// being changed. A stored past end date that is left untouched is kept.
///
/// # Errors
///
/// Returns a rejection on [`Field::End`] with
/// [`RejectionReason::EndDateInPast`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use scrumboard::board::validation::rules::validate_sprint_end;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");
/// let yesterday = NaiveDate::from_ymd_opt(2024, 5, 9).expect("valid date");
///
/// assert!(validate_sprint_end(today, None, today).is_ok());
/// assert!(validate_sprint_end(yesterday, None, today).is_err());
/// ```
pub fn validate_sprint_end(
    end: NaiveDate,
    existing: Option<&Sprint>,
    today: NaiveDate,
) -> Result<NaiveDate, FieldRejection> {
    let touched = existing.is_none_or(|sprint| sprint.end() != end);
    if touched && end < today {
        return Err(FieldRejection::new(
            Field::End,
            RejectionReason::EndDateInPast,
        ));
    }
    Ok(end)
}

/// Validates a proposed sprint reference for a task.
///
/// `proposed` is the resolved sprint, or `None` to place the task in the
/// backlog.
///
/// # Errors
///
/// Returns a rejection on [`Field::Sprint`] with
/// [`RejectionReason::CompletedTaskSprintChange`] when a done task changes
/// sprint, [`RejectionReason::AssignToPastSprint`] when an existing task moves
/// into an ended sprint, or [`RejectionReason::AddToPastSprint`] when a new
/// task is created in an ended sprint.
pub fn validate_task_sprint<'s>(
    proposed: Option<&'s Sprint>,
    existing: Option<&Task>,
    today: NaiveDate,
) -> Result<Option<&'s Sprint>, FieldRejection> {
    let ended = proposed.is_some_and(|sprint| sprint.has_ended(today));

    let Some(task) = existing else {
        if ended {
            return Err(sprint_rejection(RejectionReason::AddToPastSprint));
        }
        return Ok(proposed);
    };

    if proposed.map(Sprint::id) == task.sprint() {
        return Ok(proposed);
    }
    if task.status().is_done() {
        return Err(sprint_rejection(RejectionReason::CompletedTaskSprintChange));
    }
    if ended {
        return Err(sprint_rejection(RejectionReason::AssignToPastSprint));
    }
    Ok(proposed)
}

const fn sprint_rejection(reason: RejectionReason) -> FieldRejection {
    FieldRejection::new(Field::Sprint, reason)
}
