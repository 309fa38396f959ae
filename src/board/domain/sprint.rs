//! Sprint record and its editable fields.

use super::{RecordName, SprintId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Editable attributes of a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintFields {
    /// Sprint name.
    pub name: RecordName,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Last calendar day of the sprint.
    pub end: NaiveDate,
}

impl SprintFields {
    /// Creates sprint fields with an empty description.
    #[must_use]
    pub const fn new(name: RecordName, end: NaiveDate) -> Self {
        Self {
            name,
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

/// A time-boxed iteration that tasks are scheduled into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    id: SprintId,
    #[serde(flatten)]
    fields: SprintFields,
}

impl Sprint {
    /// Creates a new sprint with a fresh identifier.
    #[must_use]
    pub fn new(fields: SprintFields) -> Self {
        Self {
            id: SprintId::new(),
            fields,
        }
    }

    /// Reconstructs a sprint from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: SprintId, fields: SprintFields) -> Self {
        Self { id, fields }
    }

    /// Returns the sprint identifier.
    #[must_use]
    pub const fn id(&self) -> SprintId {
        self.id
    }

    /// Returns the sprint name.
    #[must_use]
    pub const fn name(&self) -> &RecordName {
        &self.fields.name
    }

    /// Returns the sprint description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the sprint end date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.fields.end
    }

    /// Returns all editable fields.
    #[must_use]
    pub const fn fields(&self) -> &SprintFields {
        &self.fields
    }

    /// Returns `true` when the sprint ended before `today`.
    #[must_use]
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.fields.end < today
    }

    /// Replaces the editable fields, keeping the identifier.
    pub fn replace_fields(&mut self, fields: SprintFields) {
        self.fields = fields;
    }
}
