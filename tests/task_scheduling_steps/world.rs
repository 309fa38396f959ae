//! Shared world state for scheduling BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::FixedClock;
use chrono::NaiveDate;
use rstest::fixture;
use scrumboard::board::{
    adapters::memory::{InMemorySprintRepository, InMemoryUserRepository},
    domain::{Sprint, Task, TaskFields},
    services::WriteService,
    validation::ValidationRejection,
};

/// Service type used by the BDD world.
pub type TestWriteService =
    WriteService<InMemorySprintRepository, InMemoryUserRepository, FixedClock>;

/// Outcome of the last write attempted in a scenario.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The write was accepted; task writes keep the accepted fields.
    Accepted(Option<TaskFields>),
    /// The write was rejected.
    Rejected(ValidationRejection),
}

/// Scenario world for scheduling behaviour tests.
pub struct SchedulingWorld {
    /// Date the service clock reports.
    pub today: Option<NaiveDate>,
    /// Sprints visible to the service.
    pub sprints: InMemorySprintRepository,
    /// Users visible to the service.
    pub users: InMemoryUserRepository,
    /// Sprints created by `Given` steps, by name.
    pub named_sprints: HashMap<String, Sprint>,
    /// Stored task the scenario updates.
    pub task: Option<Task>,
    /// Result of the last `When` step.
    pub last_outcome: Option<WriteOutcome>,
}

impl SchedulingWorld {
    /// Creates a world with empty repositories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            today: None,
            sprints: InMemorySprintRepository::new(),
            users: InMemoryUserRepository::new(),
            named_sprints: HashMap::new(),
            task: None,
            last_outcome: None,
        }
    }

    /// Builds a write service whose clock reports the scenario's today.
    ///
    /// # Errors
    ///
    /// Returns an error when no `today is` step has run.
    pub fn service(&self) -> Result<TestWriteService, eyre::Report> {
        let today = self
            .today
            .ok_or_else(|| eyre::eyre!("missing today's date in scenario world"))?;
        Ok(WriteService::new(
            Arc::new(self.sprints.clone()),
            Arc::new(self.users.clone()),
            Arc::new(FixedClock::on(today)),
        ))
    }

    /// Looks up a sprint created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no sprint has the given name.
    pub fn sprint_named(&self, name: &str) -> Result<&Sprint, eyre::Report> {
        self.named_sprints
            .get(name)
            .ok_or_else(|| eyre::eyre!("unknown sprint '{name}' in scenario world"))
    }
}

impl Default for SchedulingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SchedulingWorld {
    SchedulingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
