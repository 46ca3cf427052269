//! Route tables.
//!
//! Each version is a complete declaration of the table; the application
//! serves the latest one.

use pianino::prelude::*;

use crate::pages::{DASHBOARD_PAGE, HOME_PAGE, LOGIN_PAGE, NOT_FOUND_PAGE, REGISTER_PAGE};

/// First release: landing page and sign-up.
pub fn routes_v1() -> RouteTable<Page> {
    RouteTable::new([route("/", HOME_PAGE), route("/register", REGISTER_PAGE)])
}

/// Current release: adds sign-in and the dashboard.
pub fn routes_v2() -> RouteTable<Page> {
    RouteTable::new([
        route("/", HOME_PAGE),
        route("/register", REGISTER_PAGE),
        route("/login", LOGIN_PAGE),
        route("/dashboard", DASHBOARD_PAGE),
    ])
}

/// The table the application is built with, unmatched paths going to the
/// not-found page.
pub fn routes() -> RouteTable<Page> {
    routes_v2().with_fallback(NOT_FOUND_PAGE)
}
