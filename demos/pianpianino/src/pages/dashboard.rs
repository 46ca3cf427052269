use pianino::prelude::*;

/// Task overview shown after signing in.
pub const DASHBOARD_PAGE: Page = Page::new("dashboard", dashboard_page);

fn dashboard_page(cx: &PageContext<'_>) -> Html {
    let toolbar = cx.component(
        "n-space",
        format!(
            "{}{}",
            cx.component("n-input", "New task"),
            cx.component("n-button", "Add")
        ),
    );

    cx.component(
        "n-card",
        format!(r#"<h2>Dashboard</h2>{toolbar}<ul class="tasks"></ul>"#),
    )
}
