//! Application shell: renders the page selected by the router into a host
//! element, inside a root layout, with plugins installed up front.

pub mod prelude;

mod app;
mod config;
mod error;
mod host;
mod logging;
mod plugin;

pub use app::App;
pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
#[cfg(target_arch = "wasm32")]
pub use host::DomHost;
pub use host::{Host, MemoryHost};
pub use logging::init_logging;
pub use plugin::{
    AppContext, Component, ComponentLibrary, ComponentRegistry, Plugin, RouterPlugin,
};

pub use pianino_router;
use pianino_router::RouteParams;
#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen;
#[cfg(target_arch = "wasm32")]
pub use web_sys;

/// Trait that defines the root layout of an application.
///
/// The layout receives the current page's markup and decides where it goes.
pub trait View {
    /// Render the layout around `outlet`.
    fn render(&self, outlet: Html) -> Html;
}

impl<F> View for F
where
    F: Fn(Html) -> Html,
{
    fn render(&self, outlet: Html) -> Html {
        self(outlet)
    }
}

/// Rendered HTML markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// Wraps already rendered markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The markup, owned.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Html(content.to_owned())
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Html(content)
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a page sees while rendering.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Normalised path being rendered.
    pub path: &'a str,
    /// Parameters captured by the route pattern.
    pub params: &'a RouteParams,
    /// Globally registered components.
    pub components: &'a ComponentRegistry,
}

impl PageContext<'_> {
    /// Renders a registered component around `children`.
    pub fn component(&self, name: &str, children: impl Into<Html>) -> Html {
        self.components.render(name, children)
    }
}

/// Page identifier stored in route tables: a name plus a render function.
///
/// Two pages are equal when their names are.
#[derive(Clone, Copy)]
pub struct Page {
    name: &'static str,
    render: fn(&PageContext<'_>) -> Html,
}

impl Page {
    /// Declares a page.
    pub const fn new(name: &'static str, render: fn(&PageContext<'_>) -> Html) -> Self {
        Self { name, render }
    }

    /// The page's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Renders the page.
    pub fn render(&self, cx: &PageContext<'_>) -> Html {
        (self.render)(cx)
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Page {}

impl std::hash::Hash for Page {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Page").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about(_cx: &PageContext<'_>) -> Html {
        Html::from("about")
    }

    fn other(_cx: &PageContext<'_>) -> Html {
        Html::from("other")
    }

    #[test]
    fn test_page_identity_is_the_name() {
        assert_eq!(Page::new("about", about), Page::new("about", other));
        assert_ne!(Page::new("about", about), Page::new("contact", about));
        assert_eq!(format!("{:?}", Page::new("about", about)), "Page(\"about\")");
    }

    #[test]
    fn test_page_render() {
        let params = RouteParams::default();
        let components = ComponentRegistry::default();
        let cx = PageContext {
            path: "/about",
            params: &params,
            components: &components,
        };

        assert_eq!(Page::new("about", about).render(&cx).as_str(), "about");
    }

    #[test]
    fn test_closure_view() {
        let layout = |outlet: Html| Html::new(format!("<main>{outlet}</main>"));

        assert_eq!(layout.render(Html::from("x")).as_str(), "<main>x</main>");
    }
}
