//! Documents the shell can render into.

use std::collections::BTreeMap;

use crate::{Html, ShellError};

/// The surrounding document owning the host element.
pub trait Host {
    /// Whether an element matches `selector`.
    fn contains(&self, selector: &str) -> bool;

    /// Replaces the content of the element matching `selector`.
    fn set_inner_html(&mut self, selector: &str, html: &Html) -> Result<(), ShellError>;

    /// Current content of the element matching `selector`.
    fn inner_html(&self, selector: &str) -> Option<String>;
}

/// Document kept in memory, keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    elements: BTreeMap<String, String>,
}

impl MemoryHost {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with one empty element reachable by `selector`.
    pub fn with_element(selector: impl Into<String>) -> Self {
        let mut host = Self::new();
        host.elements.insert(selector.into(), String::new());
        host
    }
}

impl Host for MemoryHost {
    fn contains(&self, selector: &str) -> bool {
        self.elements.contains_key(selector)
    }

    fn set_inner_html(&mut self, selector: &str, html: &Html) -> Result<(), ShellError> {
        let content = self
            .elements
            .get_mut(selector)
            .ok_or_else(|| ShellError::HostElementNotFound(selector.to_owned()))?;

        *content = html.as_str().to_owned();
        Ok(())
    }

    fn inner_html(&self, selector: &str) -> Option<String> {
        self.elements.get(selector).cloned()
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHost;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::Host;
    use crate::{Html, ShellError};

    /// The browser document.
    #[derive(Debug, Clone)]
    pub struct DomHost {
        document: web_sys::Document,
    }

    impl DomHost {
        /// Wraps the current window's document.
        pub fn new() -> Result<Self, ShellError> {
            let window =
                web_sys::window().ok_or_else(|| ShellError::Host("no global window".to_owned()))?;
            let document = window
                .document()
                .ok_or_else(|| ShellError::Host("no document object".to_owned()))?;

            Ok(Self { document })
        }

        fn element(&self, selector: &str) -> Option<web_sys::Element> {
            self.document.query_selector(selector).ok().flatten()
        }
    }

    impl Host for DomHost {
        fn contains(&self, selector: &str) -> bool {
            self.element(selector).is_some()
        }

        fn set_inner_html(&mut self, selector: &str, html: &Html) -> Result<(), ShellError> {
            let element = self
                .element(selector)
                .ok_or_else(|| ShellError::HostElementNotFound(selector.to_owned()))?;

            element.set_inner_html(html.as_str());
            Ok(())
        }

        fn inner_html(&self, selector: &str) -> Option<String> {
            self.element(selector).map(|element| element.inner_html())
        }
    }
}
