//! Given steps for scheduling BDD scenarios.

use super::world::SchedulingWorld;
use crate::test_helpers::parse_day;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use scrumboard::board::domain::{RecordName, Sprint, SprintFields, Task, TaskFields, TaskStatus};

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut SchedulingWorld, date: String) -> Result<(), eyre::Report> {
    world.today = Some(parse_day(&date)?);
    Ok(())
}

#[given(r#"a sprint "{name}" ending "{date}""#)]
fn sprint_ending(
    world: &mut SchedulingWorld,
    name: String,
    date: String,
) -> Result<(), eyre::Report> {
    let fields = SprintFields::new(RecordName::new(name.as_str())?, parse_day(&date)?);
    let sprint = Sprint::new(fields);
    world
        .sprints
        .save(sprint.clone())
        .wrap_err("store sprint for scheduling scenario")?;
    world.named_sprints.insert(name, sprint);
    Ok(())
}

#[given(r#"a "{status}" task "{name}" in sprint "{sprint}""#)]
fn task_in_sprint(
    world: &mut SchedulingWorld,
    status: String,
    name: String,
    sprint: String,
) -> Result<(), eyre::Report> {
    let parsed_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let sprint_id = world.sprint_named(&sprint)?.id();
    let fields = TaskFields::new(RecordName::new(name)?)
        .in_sprint(sprint_id)
        .with_status(parsed_status);
    world.task = Some(Task::new(fields));
    Ok(())
}
