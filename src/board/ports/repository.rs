//! Repository ports for resolving records referenced by proposed writes.

use crate::board::domain::{Sprint, SprintId, User, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository lookups.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Sprint lookup contract.
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Finds a sprint by identifier.
    ///
    /// Returns `None` when the sprint does not exist.
    async fn find_by_id(&self, id: SprintId) -> RepositoryResult<Option<Sprint>>;
}

/// User lookup contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by username.
    ///
    /// Returns `None` when no account uses the username.
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
