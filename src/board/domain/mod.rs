//! Domain model for the scrum board.
//!
//! Sprints, tasks and users are plain typed records. Persistence, routing
//! and signing stay outside the domain boundary.

mod error;
mod ids;
mod name;
mod sprint;
mod task;
mod user;

pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{SprintId, TaskId, UserId, Username};
pub use name::RecordName;
pub use sprint::{Sprint, SprintFields};
pub use task::{Task, TaskFields, TaskStatus};
pub use user::{PersistedUserData, User};
