//! Route table resolution for pianino applications.
//!
//! A [`RouteTable`] maps path patterns to page identifiers and resolves a
//! requested path to the page of the first matching entry. A [`Router`] adds
//! a [`History`](history::History) on top so the application can navigate.

mod error;
pub mod history;
mod path_matches;
mod route_table;
mod router;

pub use error::{NavigationError, RouteError};
pub use path_matches::normalize_path;
pub use route_table::{RouteEntry, RouteMatch, RouteTable, route};
pub use router::Router;

/// Parameters captured from a path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: Vec<(String, String)>,
}

impl RouteParams {
    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        self.params.push((name.to_owned(), value.into()));
    }

    /// Value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Captured `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
