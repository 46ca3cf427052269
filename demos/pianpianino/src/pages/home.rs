use pianino::prelude::*;

use super::link;

/// Landing page.
pub const HOME_PAGE: Page = Page::new("home", home_page);

fn home_page(cx: &PageContext<'_>) -> Html {
    let actions = cx.component(
        "n-space",
        format!("{}{}", link("/register", "Register"), link("/login", "Login")),
    );

    cx.component(
        "n-card",
        format!("<h1>Pianpianino</h1><p>One task at a time.</p>{actions}"),
    )
}
