//! Session history backends.
//!
//! The router only ever sees base-relative paths. A backend strips its base
//! from locations it reads and adds it back to URLs it writes, so an app served
//! under `/app/` routes `/app/login` as `/login`.

use crate::path_matches::normalize_path;

/// Navigation stack the router records locations in.
pub trait History {
    /// Base path the application is served under, always ending in `/`.
    fn base(&self) -> &str;

    /// Current base-relative location.
    fn location(&self) -> &str;

    /// Adds a new entry after the current one, dropping any forward entries.
    fn push(&mut self, path: &str);

    /// Overwrites the current entry.
    fn replace(&mut self, path: &str);

    /// Moves one entry back. Returns `false` at the start of the stack.
    fn back(&mut self) -> bool;

    /// Moves one entry forward. Returns `false` at the end of the stack.
    fn forward(&mut self) -> bool;

    /// Full URL of the current location, base included.
    fn href(&self) -> String {
        join_base(self.base(), self.location())
    }
}

impl<H: History + ?Sized> History for Box<H> {
    fn base(&self) -> &str {
        (**self).base()
    }

    fn location(&self) -> &str {
        (**self).location()
    }

    fn push(&mut self, path: &str) {
        (**self).push(path);
    }

    fn replace(&mut self, path: &str) {
        (**self).replace(path);
    }

    fn back(&mut self) -> bool {
        (**self).back()
    }

    fn forward(&mut self) -> bool {
        (**self).forward()
    }
}

/// Normalises a base path to the `/segment/.../` form.
pub fn normalize_base(base: &str) -> String {
    let base = normalize_path(base);
    if base == "/" { base } else { format!("{base}/") }
}

/// Removes `base` from the front of `url`, yielding a base-relative path.
///
/// URLs outside the base are returned unchanged. The query string and
/// fragment are kept.
///
/// ```
/// use pianino_router::history::strip_base;
///
/// assert_eq!(strip_base("/app/", "/app/login?next=1"), "/login?next=1");
/// assert_eq!(strip_base("/app/", "/app"), "/");
/// assert_eq!(strip_base("/app/", "/other"), "/other");
/// ```
pub fn strip_base(base: &str, url: &str) -> String {
    let prefix = base.trim_end_matches('/');

    if prefix.is_empty() {
        return with_leading_slash(url);
    }

    match url.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() => "/".to_owned(),
        Some(rest) if rest.starts_with(['/', '?', '#']) => with_leading_slash(rest),
        _ => with_leading_slash(url),
    }
}

/// Prepends `base` to a base-relative path.
pub fn join_base(base: &str, path: &str) -> String {
    let prefix = base.trim_end_matches('/');
    format!("{prefix}{}", with_leading_slash(path))
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// In-process history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    /// Starts a stack whose only entry is `initial`.
    pub fn new(initial: &str) -> Self {
        Self::with_base("/", initial)
    }

    /// Starts a stack under `base`. `initial` may be either a full URL under
    /// the base or a base-relative path.
    pub fn with_base(base: &str, initial: &str) -> Self {
        let base = normalize_base(base);
        let initial = strip_base(&base, initial);

        Self {
            base,
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Every recorded entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(with_leading_slash(path));
        self.cursor += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = with_leading_slash(path);
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }

        self.cursor += 1;
        true
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebHistory;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{History, MemoryHistory, join_base};
    use tracing::warn;
    use wasm_bindgen::JsValue;

    /// Browser history backend.
    ///
    /// Keeps its own stack so `location` never has to round-trip through the
    /// DOM, and mirrors every change into `window.history`.
    #[derive(Debug)]
    pub struct WebHistory {
        stack: MemoryHistory,
        history: web_sys::History,
    }

    impl WebHistory {
        /// Reads the current browser location under `base`.
        ///
        /// Returns `None` outside a browser window.
        pub fn new(base: &str) -> Option<Self> {
            let window = web_sys::window()?;
            let location = window.location();
            let history = window.history().ok()?;

            let url = format!(
                "{}{}{}",
                location.pathname().ok()?,
                location.search().unwrap_or_default(),
                location.hash().unwrap_or_default()
            );

            Some(Self {
                stack: MemoryHistory::with_base(base, &url),
                history,
            })
        }

        fn sync(&self, replace: bool) {
            let url = join_base(self.stack.base(), self.stack.location());

            let result = if replace {
                self.history
                    .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            } else {
                self.history.push_state_with_url(&JsValue::NULL, "", Some(&url))
            };

            if let Err(e) = result {
                warn!(%url, error = ?e, "failed to update browser history");
            }
        }
    }

    impl History for WebHistory {
        fn base(&self) -> &str {
            self.stack.base()
        }

        fn location(&self) -> &str {
            self.stack.location()
        }

        fn push(&mut self, path: &str) {
            self.stack.push(path);
            self.sync(false);
        }

        fn replace(&mut self, path: &str) {
            self.stack.replace(path);
            self.sync(true);
        }

        fn back(&mut self) -> bool {
            if !self.stack.back() {
                return false;
            }

            if let Err(e) = self.history.back() {
                warn!(error = ?e, "failed to go back in browser history");
            }
            true
        }

        fn forward(&mut self) -> bool {
            if !self.stack.forward() {
                return false;
            }

            if let Err(e) = self.history.forward() {
                warn!(error = ?e, "failed to go forward in browser history");
            }
            true
        }
    }
}
