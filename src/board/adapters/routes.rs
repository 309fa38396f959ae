//! Path-template URL reverser for the board API.

use crate::board::ports::{RequestContext, Route, UrlReverser};

/// Default mount point of the board API.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Builds resource URLs from fixed path templates under an API prefix.
///
/// # Examples
///
/// ```
/// use scrumboard::board::adapters::ApiRoutes;
/// use scrumboard::board::ports::{RequestContext, Route, UrlReverser};
///
/// let routes = ApiRoutes::default();
/// let context = RequestContext::with_base_url("https://board.example.com/");
///
/// assert_eq!(
///     routes.reverse(Route::TaskList, &context),
///     "https://board.example.com/api/tasks/"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    prefix: String,
}

impl ApiRoutes {
    /// Creates a reverser mounted at `prefix`.
    ///
    /// The prefix is normalized to start with a slash and to carry no
    /// trailing slash; an empty prefix mounts the API at the root.
    #[must_use]
    pub fn new(prefix: impl AsRef<str>) -> Self {
        let trimmed = prefix.as_ref().trim().trim_matches('/');
        let normalized = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { prefix: normalized }
    }

    /// Returns the normalized API prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn path(&self, route: Route<'_>) -> String {
        match route {
            Route::SprintDetail(id) => format!("{}/sprints/{id}/", self.prefix),
            Route::TaskList => format!("{}/tasks/", self.prefix),
            Route::TaskDetail(id) => format!("{}/tasks/{id}/", self.prefix),
            Route::UserDetail(username) => format!("{}/users/{username}/", self.prefix),
        }
    }
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_PREFIX)
    }
}

impl UrlReverser for ApiRoutes {
    fn reverse(&self, route: Route<'_>, context: &RequestContext) -> String {
        let base = context.base_url().unwrap_or_default();
        format!("{base}{}", self.path(route))
    }
}
