//! Plugins and the state they install into.

use std::collections::BTreeMap;

use pianino_router::history::{History, MemoryHistory};
use pianino_router::{RouteTable, Router};
use tracing::{debug, warn};

use crate::{Html, Page, ShellConfig, ShellError};

/// Something installable into an [`App`](crate::App) with `use_plugin`.
pub trait Plugin {
    /// Unique name. A second plugin with the same name is skipped.
    fn name(&self) -> &'static str;

    /// Installs the plugin.
    fn install(self, cx: &mut AppContext) -> Result<(), ShellError>;
}

/// Renders a component around its slot content.
pub type Component = fn(Html) -> Html;

/// Shared state plugins install into.
#[derive(Debug, Default)]
pub struct AppContext {
    pub(crate) components: ComponentRegistry,
    pub(crate) router: Option<Router<Page>>,
}

impl AppContext {
    /// Globally registered components.
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Registers a global component. Tag names must be unique.
    pub fn register_component(
        &mut self,
        name: &'static str,
        component: Component,
    ) -> Result<(), ShellError> {
        self.components.register(name, component)
    }

    /// The installed router.
    pub fn router(&self) -> Option<&Router<Page>> {
        self.router.as_ref()
    }

    /// Installs `router`, failing if one is already there.
    pub fn install_router(&mut self, router: Router<Page>) -> Result<(), ShellError> {
        if self.router.is_some() {
            return Err(ShellError::Plugin {
                plugin: "router",
                reason: "a router is already installed".to_owned(),
            });
        }

        self.router = Some(router);
        Ok(())
    }
}

/// Global components by tag name.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    components: BTreeMap<&'static str, Component>,
}

impl ComponentRegistry {
    fn register(&mut self, name: &'static str, component: Component) -> Result<(), ShellError> {
        if self.components.contains_key(name) {
            return Err(ShellError::Plugin {
                plugin: "components",
                reason: format!("component '{name}' is already registered"),
            });
        }

        self.components.insert(name, component);
        Ok(())
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered tag names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.keys().copied()
    }

    /// Renders `name` around `children`.
    ///
    /// Unknown names render as a plain custom element so the page still shows
    /// its content.
    pub fn render(&self, name: &str, children: impl Into<Html>) -> Html {
        let children = children.into();

        match self.components.get(name) {
            Some(component) => component(children),
            None => {
                warn!(component = name, "failed to resolve component");
                Html::new(format!("<{name}>{children}</{name}>"))
            }
        }
    }
}

/// UI component library plugin: a named bundle of global components.
#[derive(Debug, Clone)]
pub struct ComponentLibrary {
    name: &'static str,
    components: Vec<(&'static str, Component)>,
}

impl ComponentLibrary {
    /// An empty library called `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            components: Vec::new(),
        }
    }

    /// Adds a component to the bundle.
    pub fn component(mut self, tag: &'static str, component: Component) -> Self {
        self.components.push((tag, component));
        self
    }
}

impl Plugin for ComponentLibrary {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install(self, cx: &mut AppContext) -> Result<(), ShellError> {
        for (tag, component) in self.components {
            cx.register_component(tag, component)
                .map_err(|e| ShellError::Plugin {
                    plugin: self.name,
                    reason: e.to_string(),
                })?;
        }

        debug!(library = self.name, "component library installed");
        Ok(())
    }
}

/// Installs a [`Router`] over [`Page`]s.
#[derive(Debug)]
pub struct RouterPlugin {
    router: Router<Page>,
}

impl RouterPlugin {
    /// Wraps `router` for installation.
    pub fn new(router: Router<Page>) -> Self {
        Self { router }
    }

    /// Builds a router over `table` with the history backend for the current
    /// target, served under `config.history_base`.
    pub fn from_config(table: RouteTable<Page>, config: &ShellConfig) -> Self {
        Self::new(Router::new(table, create_history(&config.history_base)))
    }
}

fn create_history(base: &str) -> Box<dyn History> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = pianino_router::history::WebHistory::new(base) {
            return Box::new(history);
        }
        warn!("no browser history available, falling back to memory history");
    }

    Box::new(MemoryHistory::with_base(base, "/"))
}

impl Plugin for RouterPlugin {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(self, cx: &mut AppContext) -> Result<(), ShellError> {
        cx.install_router(self.router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(children: Html) -> Html {
        Html::new(format!("<button class=\"btn\">{children}</button>"))
    }

    #[test]
    fn test_component_library_install() {
        let mut cx = AppContext::default();
        let library = ComponentLibrary::new("ui").component("ui-button", button);

        assert_eq!(library.name(), "ui");
        library.install(&mut cx).unwrap();

        assert!(cx.components().contains("ui-button"));
        assert_eq!(cx.components().names().collect::<Vec<_>>(), ["ui-button"]);
        assert_eq!(
            cx.components().render("ui-button", "Go").as_str(),
            "<button class=\"btn\">Go</button>"
        );
    }

    #[test]
    fn test_unknown_component_renders_as_element() {
        let registry = ComponentRegistry::default();

        assert_eq!(
            registry.render("ui-card", "body").as_str(),
            "<ui-card>body</ui-card>"
        );
    }

    #[test]
    fn test_component_conflict() {
        let mut cx = AppContext::default();
        ComponentLibrary::new("first")
            .component("ui-button", button)
            .install(&mut cx)
            .unwrap();

        let err = ComponentLibrary::new("second")
            .component("ui-button", button)
            .install(&mut cx)
            .unwrap_err();

        assert!(matches!(err, ShellError::Plugin { plugin: "second", .. }));
    }

    #[test]
    fn test_router_plugin_from_config() {
        fn home(_cx: &crate::PageContext<'_>) -> Html {
            Html::from("home")
        }

        let config = ShellConfig {
            history_base: "/app/".to_owned(),
            ..ShellConfig::default()
        };
        let table = RouteTable::new([pianino_router::route("/", Page::new("home", home))]);

        let mut cx = AppContext::default();
        RouterPlugin::from_config(table, &config)
            .install(&mut cx)
            .unwrap();

        let router = cx.router().unwrap();
        assert_eq!(router.history().base(), "/app/");
        assert_eq!(router.history().location(), "/");

        let err = cx
            .install_router(Router::with_memory_history(RouteTable::new([])))
            .unwrap_err();
        assert!(matches!(err, ShellError::Plugin { plugin: "router", .. }));
    }
}
