//! Task record, status and editable fields.

use super::{ParseTaskStatusError, RecordName, SprintId, TaskId, Username};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task progress status.
///
/// Serializes in storage form. Deserialization accepts any letter case and
/// surrounding whitespace, like [`TaskStatus::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TaskStatus {
    /// Work has not begun.
    #[default]
    NotStarted,
    /// Work is under way.
    Started,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable label shown on the board.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Started => "Started",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for completed tasks.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "started" => Ok(Self::Started),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Editable attributes of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Task name.
    pub name: RecordName,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Sprint the task is scheduled into, or `None` for the backlog.
    pub sprint: Option<SprintId>,
    /// Progress status.
    pub status: TaskStatus,
    /// Display position within its column.
    pub order: i32,
    /// Username of the assignee, if any.
    pub assigned: Option<Username>,
    /// Day work started.
    pub started: Option<NaiveDate>,
    /// Day work is due.
    pub due: Option<NaiveDate>,
    /// Day work completed.
    pub completed: Option<NaiveDate>,
}

impl TaskFields {
    /// Creates backlog task fields with defaults for everything but the name.
    #[must_use]
    pub const fn new(name: RecordName) -> Self {
        Self {
            name,
            description: String::new(),
            sprint: None,
            status: TaskStatus::NotStarted,
            order: 0,
            assigned: None,
            started: None,
            due: None,
            completed: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Schedules the task into a sprint.
    #[must_use]
    pub const fn in_sprint(mut self, sprint: SprintId) -> Self {
        self.sprint = Some(sprint);
        self
    }

    /// Sets the task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the display order.
    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub fn assigned_to(mut self, username: Username) -> Self {
        self.assigned = Some(username);
        self
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(fields: TaskFields) -> Self {
        Self {
            id: TaskId::new(),
            fields,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &RecordName {
        &self.fields.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the sprint the task belongs to, or `None` for backlog tasks.
    #[must_use]
    pub const fn sprint(&self) -> Option<SprintId> {
        self.fields.sprint
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.fields.status
    }

    /// Returns the display order.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.fields.order
    }

    /// Returns the assignee's username, if any.
    #[must_use]
    pub const fn assigned(&self) -> Option<&Username> {
        self.fields.assigned.as_ref()
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn started(&self) -> Option<NaiveDate> {
        self.fields.started
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDate> {
        self.fields.due
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub const fn completed(&self) -> Option<NaiveDate> {
        self.fields.completed
    }

    /// Returns all editable fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Replaces the editable fields, keeping the identifier.
    pub fn replace_fields(&mut self, fields: TaskFields) {
        self.fields = fields;
    }
}
