//! Task representation.

use super::TaskLinks;
use crate::board::domain::{SprintId, Task, TaskId, TaskStatus, Username};
use chrono::NaiveDate;
use serde::Serialize;

/// Wire shape of a task.
///
/// The assignee is rendered by username and the status is accompanied by
/// its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRepresentation {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Sprint identifier, `None` for backlog tasks.
    pub sprint: Option<SprintId>,
    /// Status in storage form.
    pub status: TaskStatus,
    /// Human-readable status label.
    pub status_display: &'static str,
    /// Display position.
    pub order: i32,
    /// Assignee username.
    pub assigned: Option<Username>,
    /// Day work started.
    pub started: Option<NaiveDate>,
    /// Day work is due.
    pub due: Option<NaiveDate>,
    /// Day work completed.
    pub completed: Option<NaiveDate>,
    /// Related resources.
    pub links: TaskLinks,
}

impl TaskRepresentation {
    /// Shapes `task` with precomputed `links`.
    #[must_use]
    pub fn new(task: &Task, links: TaskLinks) -> Self {
        Self {
            id: task.id(),
            name: task.name().as_str().to_owned(),
            description: task.description().to_owned(),
            sprint: task.sprint(),
            status: task.status(),
            status_display: task.status().display_label(),
            order: task.order(),
            assigned: task.assigned().cloned(),
            started: task.started(),
            due: task.due(),
            completed: task.completed(),
            links,
        }
    }
}
