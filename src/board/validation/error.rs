//! Field-level rejections raised when a proposed write breaks board rules.

use crate::board::domain::SprintId;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;
use thiserror::Error;

/// Writable field a rejection is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Sprint or task name.
    Name,
    /// Sprint end date.
    End,
    /// Task sprint reference.
    Sprint,
    /// Task assignee reference.
    Assigned,
}

impl Field {
    /// Returns the field name as it appears in representations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::End => "end",
            Self::Sprint => "sprint",
            Self::Assigned => "assigned",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing reason a proposed value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// A new or edited sprint end date lies before today.
    #[error("End date cannot be in the past.")]
    EndDateInPast,

    /// A completed task was moved to another sprint or to the backlog.
    #[error("Cannot change the sprint of a completed task.")]
    CompletedTaskSprintChange,

    /// An existing task was moved into a sprint that has ended.
    #[error("Cannot assign tasks to past sprints.")]
    AssignToPastSprint,

    /// A new task was created in a sprint that has ended.
    #[error("Cannot add tasks to past sprints.")]
    AddToPastSprint,

    /// The referenced sprint does not exist.
    #[error("Invalid pk \"{0}\" - object does not exist.")]
    UnknownSprint(SprintId),

    /// No account uses the referenced username.
    #[error("Object with username={0} does not exist.")]
    UnknownUser(String),

    /// The name is empty after trimming.
    #[error("This field may not be blank.")]
    BlankName,

    /// The name exceeds the column width.
    #[error("Ensure this field has no more than {max} characters.")]
    NameTooLong {
        /// The maximum allowed number of characters.
        max: usize,
    },
}

/// A proposed value rejected on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldRejection {
    field: Field,
    reason: RejectionReason,
}

impl FieldRejection {
    /// Creates a rejection of `field` for `reason`.
    #[must_use]
    pub const fn new(field: Field, reason: RejectionReason) -> Self {
        Self { field, reason }
    }

    /// Returns the rejected field.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns the rejection reason.
    #[must_use]
    pub const fn reason(&self) -> &RejectionReason {
        &self.reason
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

/// A proposed write rejected on one or more fields.
///
/// Field rejections keep the order in which the fields were checked.
/// Serializes as `{"<field>": ["<message>", ...], ...}` with one key per
/// rejected field, mirroring the error body clients already expect from the
/// board API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.rejections))]
pub struct ValidationRejection {
    rejections: Vec<FieldRejection>,
}

impl ValidationRejection {
    /// Creates a rejection of a single `field` for `reason`.
    #[must_use]
    pub fn new(field: Field, reason: RejectionReason) -> Self {
        Self::from(FieldRejection::new(field, reason))
    }

    /// Appends another field rejection.
    #[must_use]
    pub fn with(mut self, rejection: FieldRejection) -> Self {
        self.rejections.push(rejection);
        self
    }

    /// Returns every field rejection in check order.
    #[must_use]
    pub fn rejections(&self) -> &[FieldRejection] {
        &self.rejections
    }

    /// Returns the rejected fields in check order, without repeats.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::with_capacity(self.rejections.len());
        for rejection in &self.rejections {
            if !fields.contains(&rejection.field) {
                fields.push(rejection.field);
            }
        }
        fields
    }

    /// Returns the messages recorded against `field`.
    #[must_use]
    pub fn messages_for(&self, field: Field) -> Vec<String> {
        self.rejections
            .iter()
            .filter(|rejection| rejection.field == field)
            .map(FieldRejection::message)
            .collect()
    }
}

impl From<FieldRejection> for ValidationRejection {
    fn from(rejection: FieldRejection) -> Self {
        Self {
            rejections: vec![rejection],
        }
    }
}

fn summarize(rejections: &[FieldRejection]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Serialize for ValidationRejection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            map.serialize_entry(field.as_str(), &self.messages_for(field))?;
        }
        map.end()
    }
}

/// Accumulates field rejections while every field of a write is checked.
#[derive(Debug, Default)]
pub(crate) struct RejectionCollector {
    rejections: Vec<FieldRejection>,
}

impl RejectionCollector {
    /// Records the rejection of a failed check and returns the accepted value
    /// of a passing one.
    #[must_use]
    pub(crate) fn check<T>(&mut self, result: Result<T, FieldRejection>) -> Option<T> {
        result
            .map_err(|rejection| self.rejections.push(rejection))
            .ok()
    }

    /// Returns `accepted` when no check failed.
    ///
    /// `accepted` is `None` exactly when at least one check was rejected.
    pub(crate) fn finish<T>(self, accepted: Option<T>) -> Result<T, ValidationRejection> {
        let clean = self.rejections.is_empty();
        accepted.filter(|_| clean).ok_or(ValidationRejection {
            rejections: self.rejections,
        })
    }
}
