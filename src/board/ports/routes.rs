//! URL reversal port for hypermedia links.

use crate::board::domain::{SprintId, TaskId, Username};

/// Named API resources that links can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// A single sprint.
    SprintDetail(SprintId),
    /// The task collection.
    TaskList,
    /// A single task.
    TaskDetail(TaskId),
    /// A single user, keyed by username.
    UserDetail(&'a Username),
}

/// Per-request information used to build links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    base_url: Option<String>,
}

impl RequestContext {
    /// Creates a context that yields relative links.
    #[must_use]
    pub const fn relative() -> Self {
        Self { base_url: None }
    }

    /// Creates a context that yields absolute links under `base_url`.
    ///
    /// A trailing slash is stripped so paths can be appended directly.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::relative();
        }
        Self {
            base_url: Some(trimmed.to_owned()),
        }
    }

    /// Returns the scheme and authority of the current request, if known.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

/// Port for turning a named route into a URL string.
pub trait UrlReverser: Send + Sync {
    /// Returns the URL of `route`, absolute when `context` has a base URL.
    fn reverse(&self, route: Route<'_>, context: &RequestContext) -> String;
}
