//! In-memory repositories for tests and embedding.

mod sprint;
mod user;

pub use sprint::InMemorySprintRepository;
pub use user::InMemoryUserRepository;
