//! Shared fixtures for board unit tests.

use crate::board::domain::{RecordName, Sprint, SprintFields, Task, TaskFields, TaskStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at noon UTC on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("valid time of day");
        Self(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("valid calendar date")
}

#[fixture]
pub fn today() -> NaiveDate {
    day(2024, 5, 10)
}

pub fn name(value: &str) -> RecordName {
    RecordName::new(value).expect("valid record name")
}

pub fn sprint_ending(end: NaiveDate) -> Sprint {
    Sprint::new(SprintFields::new(name("Sprint"), end))
}

pub fn task_in(sprint: Option<&Sprint>, status: TaskStatus) -> Task {
    let mut fields = TaskFields::new(name("Task")).with_status(status);
    fields.sprint = sprint.map(Sprint::id);
    Task::new(fields)
}
