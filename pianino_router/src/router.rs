//! Router combining a route table with a history backend.

use tracing::debug;

use crate::history::{History, MemoryHistory};
use crate::{NavigationError, RouteMatch, RouteTable};

/// Client-side router.
///
/// Navigation resolves the target first and only touches the history when a
/// page was found, so a failed `push` leaves the current location intact.
pub struct Router<P> {
    table: RouteTable<P>,
    history: Box<dyn History>,
}

impl<P: std::fmt::Debug> std::fmt::Debug for Router<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("location", &self.history.location())
            .finish()
    }
}

impl<P> Router<P> {
    /// Creates a router over `table` recording locations in `history`.
    pub fn new(table: RouteTable<P>, history: impl History + 'static) -> Self {
        Self {
            table,
            history: Box::new(history),
        }
    }

    /// Creates a router with an in-memory history starting at `/`.
    pub fn with_memory_history(table: RouteTable<P>) -> Self {
        Self::new(table, MemoryHistory::default())
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    /// The history backend.
    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// Resolves `path` without navigating.
    pub fn resolve(&self, path: &str) -> Option<&P> {
        self.table.resolve(path)
    }

    /// Resolves the current history location.
    pub fn current(&self) -> Result<RouteMatch<'_, P>, NavigationError> {
        let location = self.history.location();

        self.table
            .resolve_match(location)
            .ok_or_else(|| NavigationError::NotFound(location.to_owned()))
    }

    /// Navigates to `path`, adding a history entry.
    pub fn push(&mut self, path: &str) -> Result<RouteMatch<'_, P>, NavigationError> {
        let route_match = self
            .table
            .resolve_match(path)
            .ok_or_else(|| NavigationError::NotFound(path.to_owned()))?;

        self.history.push(path);
        debug!(path = %route_match.path, pattern = ?route_match.pattern, "navigated");

        Ok(route_match)
    }

    /// Navigates to `path`, overwriting the current history entry.
    pub fn replace(&mut self, path: &str) -> Result<RouteMatch<'_, P>, NavigationError> {
        let route_match = self
            .table
            .resolve_match(path)
            .ok_or_else(|| NavigationError::NotFound(path.to_owned()))?;

        self.history.replace(path);
        debug!(path = %route_match.path, pattern = ?route_match.pattern, "replaced");

        Ok(route_match)
    }

    /// Goes one entry back and resolves it.
    pub fn back(&mut self) -> Result<RouteMatch<'_, P>, NavigationError> {
        if !self.history.back() {
            return Err(NavigationError::HistoryExhausted("back"));
        }

        self.current()
    }

    /// Goes one entry forward and resolves it.
    pub fn forward(&mut self) -> Result<RouteMatch<'_, P>, NavigationError> {
        if !self.history.forward() {
            return Err(NavigationError::HistoryExhausted("forward"));
        }

        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route;

    fn router() -> Router<&'static str> {
        Router::with_memory_history(RouteTable::new([
            route("/", "home"),
            route("/register", "register"),
            route("/login", "login"),
        ]))
    }

    #[test]
    fn test_push_and_current() {
        let mut router = router();
        assert_eq!(router.current().unwrap().page, &"home");

        let found = router.push("/register?from=home").unwrap();
        assert_eq!(found.page, &"register");
        assert_eq!(found.path, "/register");

        assert_eq!(router.history().location(), "/register?from=home");
        assert_eq!(router.current().unwrap().page, &"register");
    }

    #[test]
    fn test_push_unknown_keeps_location() {
        let mut router = router();
        router.push("/login").unwrap();

        assert_eq!(
            router.push("/nowhere").unwrap_err(),
            NavigationError::NotFound("/nowhere".to_owned())
        );
        assert_eq!(router.history().location(), "/login");
    }

    #[test]
    fn test_back_forward() {
        let mut router = router();
        router.push("/register").unwrap();
        router.push("/login").unwrap();

        assert_eq!(router.back().unwrap().page, &"register");
        assert_eq!(router.back().unwrap().page, &"home");
        assert_eq!(
            router.back().unwrap_err(),
            NavigationError::HistoryExhausted("back")
        );

        assert_eq!(router.forward().unwrap().page, &"register");
        assert_eq!(router.forward().unwrap().page, &"login");
        assert!(router.forward().is_err());
    }

    #[test]
    fn test_replace() {
        let mut router = router();
        router.push("/register").unwrap();
        router.replace("/login").unwrap();

        assert_eq!(router.back().unwrap().page, &"home");
        assert_eq!(router.forward().unwrap().page, &"login");
    }

    #[test]
    fn test_current_under_base() {
        let history = MemoryHistory::with_base("/app/", "/app/login");
        let router = Router::new(router().table().clone(), history);

        assert_eq!(router.current().unwrap().page, &"login");
        assert_eq!(router.history().href(), "/app/login");
    }
}
