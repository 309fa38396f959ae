//! Read-path service shaping records into representations.

use crate::board::{
    adapters::{ApiRoutes, SignatureError, TimestampSigner},
    domain::{Sprint, Task, User},
    ports::{ChannelSigner, RequestContext, UrlReverser},
    representation::{
        LinkBuilder, SprintRepresentation, TaskRepresentation, UserRepresentation,
    },
};
use crate::config::{BoardConfig, ChannelConfig};
use mockable::Clock;
use std::sync::Arc;

/// Builds sprint, task and user representations with embedded links.
pub struct RepresentationService<R, S>
where
    R: UrlReverser,
    S: ChannelSigner,
{
    links: LinkBuilder<R, S>,
}

impl<R, S> RepresentationService<R, S>
where
    R: UrlReverser,
    S: ChannelSigner,
{
    /// Creates a representation service.
    #[must_use]
    pub const fn new(reverser: Arc<R>, signer: Arc<S>, channel: ChannelConfig) -> Self {
        Self {
            links: LinkBuilder::new(reverser, signer, channel),
        }
    }

    /// Shapes a sprint.
    #[must_use]
    pub fn sprint(&self, sprint: &Sprint, context: &RequestContext) -> SprintRepresentation {
        SprintRepresentation::new(sprint, self.links.sprint_links(sprint, context))
    }

    /// Shapes a task.
    #[must_use]
    pub fn task(&self, task: &Task, context: &RequestContext) -> TaskRepresentation {
        TaskRepresentation::new(task, self.links.task_links(task, context))
    }

    /// Shapes a user.
    #[must_use]
    pub fn user(&self, user: &User, context: &RequestContext) -> UserRepresentation {
        UserRepresentation::new(user, self.links.user_links(user, context))
    }

    /// Shapes a list of sprints, preserving order.
    #[must_use]
    pub fn sprints(&self, sprints: &[Sprint], context: &RequestContext) -> Vec<SprintRepresentation> {
        sprints
            .iter()
            .map(|sprint| self.sprint(sprint, context))
            .collect()
    }

    /// Shapes a list of tasks, preserving order.
    #[must_use]
    pub fn tasks(&self, tasks: &[Task], context: &RequestContext) -> Vec<TaskRepresentation> {
        tasks.iter().map(|task| self.task(task, context)).collect()
    }

    /// Shapes a list of users, preserving order.
    #[must_use]
    pub fn users(&self, users: &[User], context: &RequestContext) -> Vec<UserRepresentation> {
        users.iter().map(|user| self.user(user, context)).collect()
    }
}

impl<C> RepresentationService<ApiRoutes, TimestampSigner<C>>
where
    C: Clock + Send + Sync,
{
    /// Wires the default routes and signer from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidKey`] when the channel secret cannot
    /// key the signer.
    pub fn from_config(config: &BoardConfig, clock: Arc<C>) -> Result<Self, SignatureError> {
        let channel = config.channel().clone();
        let signer = TimestampSigner::new(channel.secret(), clock)?;
        Ok(Self::new(
            Arc::new(ApiRoutes::new(config.api_prefix())),
            Arc::new(signer),
            channel,
        ))
    }
}
