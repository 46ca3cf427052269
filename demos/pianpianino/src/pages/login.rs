use pianino::prelude::*;

use super::link;

/// Sign-in form.
pub const LOGIN_PAGE: Page = Page::new("login", login_page);

fn login_page(cx: &PageContext<'_>) -> Html {
    let form = format!(
        "{}{}{}",
        cx.component("n-input", "Username"),
        cx.component("n-input", "Password"),
        cx.component("n-button", "Login"),
    );

    cx.component(
        "n-card",
        format!(
            "<h2>Login</h2><form>{form}</form><p>No account yet? {}</p>",
            link("/register", "Register")
        ),
    )
}
