//! Sprint representation.

use super::SprintLinks;
use crate::board::domain::{Sprint, SprintId};
use chrono::NaiveDate;
use serde::Serialize;

/// Wire shape of a sprint: `{id, name, description, end, links}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintRepresentation {
    /// Sprint identifier.
    pub id: SprintId,
    /// Sprint name.
    pub name: String,
    /// Sprint description.
    pub description: String,
    /// Last day of the sprint.
    pub end: NaiveDate,
    /// Related resources.
    pub links: SprintLinks,
}

impl SprintRepresentation {
    /// Shapes `sprint` with precomputed `links`.
    #[must_use]
    pub fn new(sprint: &Sprint, links: SprintLinks) -> Self {
        Self {
            id: sprint.id(),
            name: sprint.name().as_str().to_owned(),
            description: sprint.description().to_owned(),
            end: sprint.end(),
            links,
        }
    }
}
