//! Then steps for scheduling BDD scenarios.

use super::world::{SchedulingWorld, WriteOutcome};
use rstest_bdd_macros::then;
use scrumboard::board::validation::FieldRejection;

#[then(r#"the write is rejected on "{field}" with "{message}""#)]
fn write_is_rejected(
    world: &SchedulingWorld,
    field: String,
    message: String,
) -> Result<(), eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(WriteOutcome::Rejected(rejection)) => {
            let messages: Vec<String> = rejection
                .rejections()
                .iter()
                .filter(|entry| entry.field().as_str() == field)
                .map(FieldRejection::message)
                .collect();
            if messages.is_empty() {
                return Err(eyre::eyre!(
                    "expected rejection on {field}, got {:?}",
                    rejection.fields()
                ));
            }
            if !messages.contains(&message) {
                return Err(eyre::eyre!(
                    "expected message {message:?} on {field}, got {messages:?}"
                ));
            }
            Ok(())
        }
        other => Err(eyre::eyre!("expected a rejection, got {other:?}")),
    }
}

#[then("the write is accepted")]
fn write_is_accepted(world: &SchedulingWorld) -> Result<(), eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(WriteOutcome::Accepted(_)) => Ok(()),
        other => Err(eyre::eyre!("expected the write to be accepted, got {other:?}")),
    }
}

#[then("the accepted task has no sprint")]
fn accepted_task_has_no_sprint(world: &SchedulingWorld) -> Result<(), eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(WriteOutcome::Accepted(Some(fields))) if fields.sprint.is_none() => Ok(()),
        other => Err(eyre::eyre!("expected an accepted backlog task, got {other:?}")),
    }
}
