//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{User, Username},
    ports::{RepositoryError, RepositoryResult, UserRepository},
};

/// Thread-safe in-memory user repository keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lock is poisoned.
    pub fn save(&self, user: User) -> RepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        users.insert(user.username().clone(), user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(username).cloned())
    }
}
