use pianino_router::{RouteMatch, Router};
use tracing::{debug, info, warn};

use crate::{
    AppContext, Host, Html, Page, PageContext, Plugin, ShellConfig, ShellError, View,
};

/// Application shell.
///
/// Built once at startup: create it around a root layout, install plugins in
/// order, then mount it on a host element. After mounting every navigation
/// re-renders the host element.
pub struct App<V> {
    root: V,
    config: ShellConfig,
    context: AppContext,
    installed: Vec<&'static str>,
    host: Option<Box<dyn Host>>,
}

impl<V> std::fmt::Debug for App<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("context", &self.context)
            .field("installed", &self.installed)
            .field("mounted", &self.host.is_some())
            .finish()
    }
}

impl<V: View> App<V> {
    /// Create an app with the default configuration.
    pub fn new(root: V) -> Self {
        Self::with_config(root, ShellConfig::default())
    }

    /// Create an app with `config`.
    pub fn with_config(root: V, config: ShellConfig) -> Self {
        Self {
            root,
            config,
            context: AppContext::default(),
            installed: Vec::new(),
            host: None,
        }
    }

    /// Installs `plugin`. Plugins install in call order; a plugin whose name
    /// is already installed is skipped.
    pub fn use_plugin<P: Plugin>(&mut self, plugin: P) -> Result<&mut Self, ShellError> {
        let name = plugin.name();

        if self.installed.contains(&name) {
            warn!(plugin = name, "plugin already installed, skipping");
            return Ok(self);
        }

        plugin.install(&mut self.context)?;
        self.installed.push(name);
        debug!(plugin = name, "plugin installed");

        Ok(self)
    }

    /// Names of installed plugins, in installation order.
    pub fn installed_plugins(&self) -> &[&'static str] {
        &self.installed
    }

    /// State installed by plugins.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Whether `mount` succeeded.
    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// The host document, once mounted.
    pub fn host(&self) -> Option<&dyn Host> {
        self.host.as_deref()
    }

    /// Attaches the app to the configured element of `host`, performs the
    /// first navigation and renders.
    pub fn mount(&mut self, host: impl Host + 'static) -> Result<(), ShellError> {
        let selector = self.config.mount_selector.clone();

        if self.host.is_some() {
            return Err(ShellError::AlreadyMounted(selector));
        }

        let router = self
            .context
            .router
            .as_mut()
            .ok_or(ShellError::RouterNotInstalled)?;

        if !host.contains(&selector) {
            return Err(ShellError::HostElementNotFound(selector));
        }

        let initial = self
            .config
            .initial_path
            .clone()
            .unwrap_or_else(|| router.history().location().to_owned());
        router.replace(&initial)?;

        self.host = Some(Box::new(host));
        self.render_host()?;
        info!(%selector, path = %initial, "app mounted");

        Ok(())
    }

    /// Navigates to `path`, re-rendering when mounted.
    pub fn navigate(&mut self, path: &str) -> Result<(), ShellError> {
        self.router_mut()?.push(path)?;
        self.render_host()
    }

    /// Goes back one history entry, re-rendering when mounted.
    pub fn back(&mut self) -> Result<(), ShellError> {
        self.router_mut()?.back()?;
        self.render_host()
    }

    /// Goes forward one history entry, re-rendering when mounted.
    pub fn forward(&mut self) -> Result<(), ShellError> {
        self.router_mut()?.forward()?;
        self.render_host()
    }

    /// Renders the current location into the root layout.
    pub fn render(&self) -> Result<Html, ShellError> {
        let router = self
            .context
            .router
            .as_ref()
            .ok_or(ShellError::RouterNotInstalled)?;

        let route_match: RouteMatch<'_, Page> = router.current()?;
        let cx = PageContext {
            path: &route_match.path,
            params: &route_match.params,
            components: &self.context.components,
        };

        Ok(self.root.render(route_match.page.render(&cx)))
    }

    fn router_mut(&mut self) -> Result<&mut Router<Page>, ShellError> {
        self.context
            .router
            .as_mut()
            .ok_or(ShellError::RouterNotInstalled)
    }

    fn render_host(&mut self) -> Result<(), ShellError> {
        if self.host.is_none() {
            return Ok(());
        }

        let html = self.render()?;

        if let Some(host) = self.host.as_mut() {
            host.set_inner_html(&self.config.mount_selector, &html)?;
        }

        Ok(())
    }
}
