//! Read-path representations of board records.
//!
//! Each representation is built in two steps: links are computed from the
//! record and the request context by [`LinkBuilder`], then the record is
//! shaped together with those links.

mod links;
mod sprint;
mod task;
mod user;

pub use links::{LinkBuilder, SprintLinks, TaskLinks, UserLinks};
pub use sprint::SprintRepresentation;
pub use task::TaskRepresentation;
pub use user::UserRepresentation;
