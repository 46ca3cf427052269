use pianino::prelude::*;

use super::link;

/// Account creation form.
pub const REGISTER_PAGE: Page = Page::new("register", register_page);

fn register_page(cx: &PageContext<'_>) -> Html {
    let fields = [
        cx.component("n-input", "Username"),
        cx.component("n-input", "Email"),
        cx.component("n-input", "Password"),
        cx.component("n-button", "Register"),
    ];

    let form = fields.iter().map(Html::as_str).collect::<String>();

    cx.component(
        "n-card",
        format!(
            "<h2>Register</h2><form>{form}</form><p>Already registered? {}</p>",
            link("/login", "Login")
        ),
    )
}
