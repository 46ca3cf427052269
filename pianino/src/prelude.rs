//! Everything an application's bootstrap and pages usually need.

pub use crate::{
    App, ComponentLibrary, Html, Page, PageContext, RouterPlugin, ShellConfig, ShellError, View,
};
pub use pianino_router::{RouteEntry, RouteParams, RouteTable, Router, route};
