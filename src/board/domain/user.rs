//! User account record.

use super::{UserId, Username};
use serde::{Deserialize, Serialize};

/// A board user that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    first_name: String,
    last_name: String,
    is_active: bool,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted given name.
    pub first_name: String,
    /// Persisted family name.
    pub last_name: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Creates an active user with empty names.
    #[must_use]
    pub fn new(username: Username) -> Self {
        Self {
            id: UserId::new(),
            username,
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            first_name: data.first_name,
            last_name: data.last_name,
            is_active: data.is_active,
        }
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Marks the account as inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns whether the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the given and family names separated by a space.
    ///
    /// Surrounding whitespace is trimmed, so a user with only one name set
    /// has no dangling separator.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}
