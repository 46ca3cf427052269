use pianino_router::NavigationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building, mounting or driving an [`App`](crate::App).
#[derive(Debug, Error)]
pub enum ShellError {
    /// An operation needed the router before `RouterPlugin` was installed.
    #[error("no router installed, call use_plugin(RouterPlugin) before mounting")]
    RouterNotInstalled,

    /// The host document has no element for the configured selector.
    #[error("host element '{0}' not found")]
    HostElementNotFound(String),

    /// `mount` was called on an app that is already mounted.
    #[error("app is already mounted on '{0}'")]
    AlreadyMounted(String),

    /// A plugin refused to install.
    #[error("plugin '{plugin}' failed to install: {reason}")]
    Plugin {
        /// Name of the failing plugin.
        plugin: &'static str,
        /// Why it failed.
        reason: String,
    },

    /// The router could not reach the requested location.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The host document rejected an operation.
    #[error("host error: {0}")]
    Host(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
