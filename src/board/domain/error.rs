//! Error types for board domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The record name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The record name exceeds the persisted column width.
    #[error("name has {actual} characters, exceeds limit of {max}")]
    NameTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// The username is empty, too long, or contains unsupported characters.
    #[error("invalid username '{0}', expected letters, digits and @.+-_ only")]
    InvalidUsername(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
