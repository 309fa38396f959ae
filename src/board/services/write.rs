//! Write-path service validating proposed sprint and task attributes.

use crate::board::{
    domain::{
        BoardDomainError, RecordName, Sprint, SprintFields, SprintId, Task, TaskFields,
        TaskStatus, User, Username,
    },
    ports::{RepositoryError, RepositoryResult, SprintRepository, UserRepository},
    validation::{
        Field, FieldRejection, RejectionCollector, RejectionReason, ValidationRejection,
        validate_sprint_end, validate_task_sprint,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Proposed sprint attributes, as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SprintInput {
    name: String,
    #[serde(default)]
    description: String,
    end: NaiveDate,
}

impl SprintInput {
    /// Creates a request with the required sprint fields.
    #[must_use]
    pub fn new(name: impl Into<String>, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            end,
        }
    }

    /// Sets the sprint description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Proposed task attributes, as submitted by a client.
///
/// The sprint is referenced by identifier and the assignee by username;
/// both are resolved during validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskInput {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    sprint: Option<SprintId>,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    order: i32,
    #[serde(default)]
    assigned: Option<String>,
    #[serde(default)]
    started: Option<NaiveDate>,
    #[serde(default)]
    due: Option<NaiveDate>,
    #[serde(default)]
    completed: Option<NaiveDate>,
}

impl TaskInput {
    /// Creates a backlog task request with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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

    /// Creates a request carrying the current attributes of `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let fields = task.fields();
        Self {
            name: fields.name.as_str().to_owned(),
            description: fields.description.clone(),
            sprint: fields.sprint,
            status: fields.status,
            order: fields.order,
            assigned: fields.assigned.as_ref().map(|name| name.as_str().to_owned()),
            started: fields.started,
            due: fields.due,
            completed: fields.completed,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the proposed sprint, `None` for the backlog.
    #[must_use]
    pub const fn with_sprint(mut self, sprint: Option<SprintId>) -> Self {
        self.sprint = sprint;
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

    /// Sets the assignee by username.
    #[must_use]
    pub fn assigned_to(mut self, username: impl Into<String>) -> Self {
        self.assigned = Some(username.into());
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn started_on(mut self, date: NaiveDate) -> Self {
        self.started = Some(date);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn due_on(mut self, date: NaiveDate) -> Self {
        self.due = Some(date);
        self
    }

    /// Sets the completion date.
    #[must_use]
    pub const fn completed_on(mut self, date: NaiveDate) -> Self {
        self.completed = Some(date);
        self
    }
}

/// Accepted sprint attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintAttributes {
    fields: SprintFields,
}

impl SprintAttributes {
    /// Returns the accepted fields.
    #[must_use]
    pub const fn fields(&self) -> &SprintFields {
        &self.fields
    }

    /// Returns the accepted fields by value.
    #[must_use]
    pub fn into_fields(self) -> SprintFields {
        self.fields
    }

    /// Creates a new sprint record from the accepted fields.
    #[must_use]
    pub fn into_sprint(self) -> Sprint {
        Sprint::new(self.fields)
    }

    /// Writes the accepted fields onto an existing sprint.
    pub fn apply_to(self, sprint: &mut Sprint) {
        sprint.replace_fields(self.fields);
    }
}

/// Accepted task attributes with their resolved references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAttributes {
    fields: TaskFields,
    sprint: Option<Sprint>,
    assignee: Option<User>,
}

impl TaskAttributes {
    /// Returns the accepted fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the resolved sprint, `None` for the backlog.
    #[must_use]
    pub const fn sprint(&self) -> Option<&Sprint> {
        self.sprint.as_ref()
    }

    /// Returns the resolved assignee.
    #[must_use]
    pub const fn assignee(&self) -> Option<&User> {
        self.assignee.as_ref()
    }

    /// Returns the accepted fields by value.
    #[must_use]
    pub fn into_fields(self) -> TaskFields {
        self.fields
    }

    /// Creates a new task record from the accepted fields.
    #[must_use]
    pub fn into_task(self) -> Task {
        Task::new(self.fields)
    }

    /// Writes the accepted fields onto an existing task.
    pub fn apply_to(self, task: &mut Task) {
        task.replace_fields(self.fields);
    }
}

/// Service-level errors for write validation.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A proposed value broke a board rule.
    #[error(transparent)]
    Rejected(#[from] ValidationRejection),
    /// A referenced record could not be looked up.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for write validation.
pub type WriteResult<T> = Result<T, WriteError>;

/// Validates proposed writes against the board rules.
///
/// Today's date is the UTC calendar date of the injected clock.
#[derive(Clone)]
pub struct WriteService<SR, UR, C>
where
    SR: SprintRepository,
    UR: UserRepository,
    C: Clock + Send + Sync,
{
    sprints: Arc<SR>,
    users: Arc<UR>,
    clock: Arc<C>,
}

impl<SR, UR, C> WriteService<SR, UR, C>
where
    SR: SprintRepository,
    UR: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a write validation service.
    #[must_use]
    pub const fn new(sprints: Arc<SR>, users: Arc<UR>, clock: Arc<C>) -> Self {
        Self {
            sprints,
            users,
            clock,
        }
    }

    /// Returns today's date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Validates a sprint create (`existing` is `None`) or update.
    ///
    /// Every field is checked before returning.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationRejection`] listing a `name` rejection when the
    /// name is blank or too long and an `end` rejection when the end date is
    /// moved into the past.
    pub fn validate_sprint(
        &self,
        input: SprintInput,
        existing: Option<&Sprint>,
    ) -> Result<SprintAttributes, ValidationRejection> {
        let mut collector = RejectionCollector::default();
        let checked_name = collector.check(parse_name(input.name));
        let checked_end = collector.check(validate_sprint_end(input.end, existing, self.today()));
        let result = collector
            .finish(checked_name.zip(checked_end))
            .map(|(name, end)| SprintAttributes {
                fields: SprintFields::new(name, end).with_description(input.description),
            });

        let sprint = existing.map(Sprint::id);
        match &result {
            Ok(_) => tracing::debug!(?sprint, "sprint write accepted"),
            Err(rejection) => tracing::info!(
                ?sprint,
                fields = ?rejection.fields(),
                %rejection,
                "sprint write rejected"
            ),
        }
        result
    }

    /// Validates a task create (`existing` is `None`) or update.
    ///
    /// The name, sprint and assignee are each checked before returning, so a
    /// rejection lists every offending field.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Rejected`] when the name is invalid, a
    /// referenced sprint or user does not exist, or the sprint rules reject
    /// the proposed sprint. Returns [`WriteError::Repository`] when a lookup
    /// fails.
    pub async fn validate_task(
        &self,
        input: TaskInput,
        existing: Option<&Task>,
    ) -> WriteResult<TaskAttributes> {
        let result = self.resolve_task(input, existing).await;

        let task = existing.map(Task::id);
        match &result {
            Ok(_) => tracing::debug!(?task, "task write accepted"),
            Err(WriteError::Rejected(rejection)) => tracing::info!(
                ?task,
                fields = ?rejection.fields(),
                %rejection,
                "task write rejected"
            ),
            Err(WriteError::Repository(err)) => {
                tracing::warn!(?task, error = %err, "task write lookup failed");
            }
        }
        result
    }

    async fn resolve_task(
        &self,
        input: TaskInput,
        existing: Option<&Task>,
    ) -> WriteResult<TaskAttributes> {
        let today = self.today();
        let mut collector = RejectionCollector::default();

        let checked_name = collector.check(parse_name(input.name));
        let checked_sprint = collector.check(self.resolve_sprint(input.sprint).await?.and_then(
            |resolved| {
                validate_task_sprint(resolved.as_ref(), existing, today)?;
                Ok(resolved)
            },
        ));
        let checked_assignee = collector.check(self.resolve_assignee(input.assigned).await?);

        let ((name, sprint), assignee) =
            collector.finish(checked_name.zip(checked_sprint).zip(checked_assignee))?;

        let fields = TaskFields {
            name,
            description: input.description,
            sprint: sprint.as_ref().map(Sprint::id),
            status: input.status,
            order: input.order,
            assigned: assignee.as_ref().map(|user| user.username().clone()),
            started: input.started,
            due: input.due,
            completed: input.completed,
        };

        Ok(TaskAttributes {
            fields,
            sprint,
            assignee,
        })
    }

    async fn resolve_sprint(
        &self,
        id: Option<SprintId>,
    ) -> RepositoryResult<Result<Option<Sprint>, FieldRejection>> {
        let Some(sprint_id) = id else {
            return Ok(Ok(None));
        };
        let found = self.sprints.find_by_id(sprint_id).await?;
        Ok(found.map(Some).ok_or_else(|| {
            FieldRejection::new(Field::Sprint, RejectionReason::UnknownSprint(sprint_id))
        }))
    }

    async fn resolve_assignee(
        &self,
        raw: Option<String>,
    ) -> RepositoryResult<Result<Option<User>, FieldRejection>> {
        let Some(value) = raw else {
            return Ok(Ok(None));
        };
        let unknown = FieldRejection::new(
            Field::Assigned,
            RejectionReason::UnknownUser(value.trim().to_owned()),
        );
        let Ok(username) = Username::new(value.as_str()) else {
            return Ok(Err(unknown));
        };
        let found = self.users.find_by_username(&username).await?;
        Ok(found.map(Some).ok_or(unknown))
    }
}

fn parse_name(raw: String) -> Result<RecordName, FieldRejection> {
    RecordName::new(raw).map_err(|err| {
        let reason = match err {
            BoardDomainError::NameTooLong { max, .. } => RejectionReason::NameTooLong { max },
            BoardDomainError::EmptyName | BoardDomainError::InvalidUsername(_) => {
                RejectionReason::BlankName
            }
        };
        FieldRejection::new(Field::Name, reason)
    })
}
