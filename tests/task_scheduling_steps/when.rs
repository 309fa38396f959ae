//! When steps for scheduling BDD scenarios.

use super::world::{SchedulingWorld, WriteOutcome, run_async};
use crate::test_helpers::parse_day;
use rstest_bdd_macros::when;
use scrumboard::board::{
    domain::SprintId,
    services::{SprintInput, TaskInput, WriteError},
};

#[when(r#"a task "{name}" is created in sprint "{sprint}""#)]
fn create_task_in_sprint(
    world: &mut SchedulingWorld,
    name: String,
    sprint: String,
) -> Result<(), eyre::Report> {
    let sprint_id = world.sprint_named(&sprint)?.id();
    let input = TaskInput::new(name).with_sprint(Some(sprint_id));
    submit_task(world, input, false)
}

#[when(r#"a task "{name}" for "{user}" is added to sprint "{sprint}""#)]
fn add_assigned_task_to_sprint(
    world: &mut SchedulingWorld,
    name: String,
    user: String,
    sprint: String,
) -> Result<(), eyre::Report> {
    let sprint_id = world.sprint_named(&sprint)?.id();
    let input = TaskInput::new(name)
        .with_sprint(Some(sprint_id))
        .assigned_to(user);
    submit_task(world, input, false)
}

#[when(r#"the task is moved to sprint "{sprint}""#)]
fn move_task_to_sprint(world: &mut SchedulingWorld, sprint: String) -> Result<(), eyre::Report> {
    let sprint_id = world.sprint_named(&sprint)?.id();
    move_task(world, Some(sprint_id))
}

#[when("the task is moved to the backlog")]
fn move_task_to_backlog(world: &mut SchedulingWorld) -> Result<(), eyre::Report> {
    move_task(world, None)
}

#[when(r#"the sprint "{name}" is saved with end "{date}""#)]
fn save_sprint_with_end(
    world: &mut SchedulingWorld,
    name: String,
    date: String,
) -> Result<(), eyre::Report> {
    let service = world.service()?;
    let existing = world.sprint_named(&name)?;
    let input = SprintInput::new(existing.name().as_str(), parse_day(&date)?)
        .with_description(existing.description());
    let outcome = match service.validate_sprint(input, Some(existing)) {
        Ok(_) => WriteOutcome::Accepted(None),
        Err(rejection) => WriteOutcome::Rejected(rejection),
    };
    world.last_outcome = Some(outcome);
    Ok(())
}

fn move_task(world: &mut SchedulingWorld, sprint: Option<SprintId>) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let input = TaskInput::from_task(task).with_sprint(sprint);
    submit_task(world, input, true)
}

fn submit_task(
    world: &mut SchedulingWorld,
    input: TaskInput,
    update: bool,
) -> Result<(), eyre::Report> {
    let service = world.service()?;
    let existing = if update { world.task.as_ref() } else { None };
    let result = run_async(service.validate_task(input, existing));
    let outcome = match result {
        Ok(attributes) => WriteOutcome::Accepted(Some(attributes.into_fields())),
        Err(WriteError::Rejected(rejection)) => WriteOutcome::Rejected(rejection),
        Err(err @ WriteError::Repository(_)) => return Err(eyre::Report::new(err)),
    };
    world.last_outcome = Some(outcome);
    Ok(())
}
