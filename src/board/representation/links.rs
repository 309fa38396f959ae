//! Hypermedia links embedded in representations.

use crate::board::{
    domain::{Sprint, Task, User},
    ports::{ChannelSigner, RequestContext, Route, UrlReverser},
};
use crate::config::ChannelConfig;
use serde::Serialize;
use std::sync::Arc;

/// Links attached to a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintLinks {
    /// The sprint itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Tasks scheduled into the sprint.
    pub tasks: String,
    /// Realtime channel for the sprint.
    pub channel: String,
}

/// Links attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLinks {
    /// The task itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// The task's sprint, `None` for backlog tasks.
    pub sprint: Option<String>,
    /// The assignee, `None` when unassigned.
    pub assigned: Option<String>,
}

/// Links attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLinks {
    /// The user itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Tasks assigned to the user.
    pub tasks: String,
}

/// Computes link maps from records and the current request.
pub struct LinkBuilder<R, S>
where
    R: UrlReverser,
    S: ChannelSigner,
{
    reverser: Arc<R>,
    signer: Arc<S>,
    channel: ChannelConfig,
}

impl<R, S> LinkBuilder<R, S>
where
    R: UrlReverser,
    S: ChannelSigner,
{
    /// Creates a link builder.
    #[must_use]
    pub const fn new(reverser: Arc<R>, signer: Arc<S>, channel: ChannelConfig) -> Self {
        Self {
            reverser,
            signer,
            channel,
        }
    }

    /// Returns the links of `sprint`.
    #[must_use]
    pub fn sprint_links(&self, sprint: &Sprint, context: &RequestContext) -> SprintLinks {
        let id = sprint.id();
        let token = self.signer.sign(&id.to_string());
        SprintLinks {
            self_link: self.reverser.reverse(Route::SprintDetail(id), context),
            tasks: format!("{}?sprint={id}", self.task_list(context)),
            channel: self.channel.socket_url(&token),
        }
    }

    /// Returns the links of `task`.
    #[must_use]
    pub fn task_links(&self, task: &Task, context: &RequestContext) -> TaskLinks {
        TaskLinks {
            self_link: self.reverser.reverse(Route::TaskDetail(task.id()), context),
            sprint: task
                .sprint()
                .map(|id| self.reverser.reverse(Route::SprintDetail(id), context)),
            assigned: task
                .assigned()
                .map(|username| self.reverser.reverse(Route::UserDetail(username), context)),
        }
    }

    /// Returns the links of `user`.
    #[must_use]
    pub fn user_links(&self, user: &User, context: &RequestContext) -> UserLinks {
        let username = user.username();
        UserLinks {
            self_link: self.reverser.reverse(Route::UserDetail(username), context),
            tasks: format!("{}?assigned={username}", self.task_list(context)),
        }
    }

    fn task_list(&self, context: &RequestContext) -> String {
        self.reverser.reverse(Route::TaskList, context)
    }
}
