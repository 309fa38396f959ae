//! User representation.

use super::UserLinks;
use crate::board::domain::{User, UserId, Username};
use serde::Serialize;

/// Wire shape of a user: `{id, username, full_name, is_active, links}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRepresentation {
    /// User identifier.
    pub id: UserId,
    /// Natural key.
    pub username: Username,
    /// Given and family names, read-only.
    pub full_name: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Related resources.
    pub links: UserLinks,
}

impl UserRepresentation {
    /// Shapes `user` with precomputed `links`.
    #[must_use]
    pub fn new(user: &User, links: UserLinks) -> Self {
        Self {
            id: user.id(),
            username: user.username().clone(),
            full_name: user.full_name(),
            is_active: user.is_active(),
            links,
        }
    }
}
