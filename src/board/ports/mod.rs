//! Port contracts for the scrum board.

pub mod repository;
pub mod routes;
pub mod signer;

pub use repository::{RepositoryError, RepositoryResult, SprintRepository, UserRepository};
pub use routes::{RequestContext, Route, UrlReverser};
pub use signer::ChannelSigner;
#[cfg(test)]
pub use signer::MockChannelSigner;
