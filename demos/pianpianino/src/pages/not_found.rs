use pianino::prelude::*;

use super::link;

/// Rendered for any path no route matches.
pub const NOT_FOUND_PAGE: Page = Page::new("not-found", not_found_page);

fn not_found_page(cx: &PageContext<'_>) -> Html {
    let path = cx
        .path
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    cx.component(
        "n-card",
        format!(
            "<h2>Page not found</h2><p>Nothing lives at <code>{path}</code>.</p>{}",
            link("/", "Back home")
        ),
    )
}
