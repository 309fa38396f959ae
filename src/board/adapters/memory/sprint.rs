//! In-memory sprint repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Sprint, SprintId},
    ports::{RepositoryError, RepositoryResult, SprintRepository},
};

/// Thread-safe in-memory sprint repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySprintRepository {
    sprints: Arc<RwLock<HashMap<SprintId, Sprint>>>,
}

impl InMemorySprintRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a sprint.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lock is poisoned.
    pub fn save(&self, sprint: Sprint) -> RepositoryResult<()> {
        let mut sprints = self.sprints.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        sprints.insert(sprint.id(), sprint);
        Ok(())
    }
}

#[async_trait]
impl SprintRepository for InMemorySprintRepository {
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>> {
        let sprints = self.sprints.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(sprints.get(&id).cloned())
    }
}
