use thiserror::Error;

/// Problems found by [`RouteTable::validate`](crate::RouteTable::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two patterns in the table can match the same paths.
    #[error("route '{pattern}' conflicts with '{existing}'")]
    Conflict {
        /// Pattern being checked.
        pattern: String,
        /// Earlier pattern it collides with.
        existing: String,
    },

    /// A placeholder or catch-all segment is malformed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Failure to move the router to a new location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route matches and the table has no fallback page.
    #[error("no route matches '{0}'")]
    NotFound(String),

    /// `back` or `forward` was requested at the end of the history stack.
    #[error("no history entry to go {0}")]
    HistoryExhausted(&'static str),
}
