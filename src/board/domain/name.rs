//! Validated display name shared by sprints and tasks.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a record name, matching the `VARCHAR(100)` column.
const MAX_NAME_LENGTH: usize = 100;

/// Non-empty sprint or task name of at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordName(String);

impl RecordName {
    /// Creates a validated record name.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyName`] when the value is empty after
    /// trimming, or [`BoardDomainError::NameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyName);
        }

        let actual = normalized.chars().count();
        if actual > MAX_NAME_LENGTH {
            return Err(BoardDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
                actual,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordName {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordName> for String {
    fn from(value: RecordName) -> Self {
        value.0
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
