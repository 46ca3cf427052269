//! Pages of the application, one per route.

mod dashboard;
mod home;
mod login;
mod not_found;
mod register;

pub use dashboard::DASHBOARD_PAGE;
pub use home::HOME_PAGE;
pub use login::LOGIN_PAGE;
pub use not_found::NOT_FOUND_PAGE;
pub use register::REGISTER_PAGE;

use pianino::Html;

pub(crate) fn link(href: &str, text: &str) -> Html {
    Html::new(format!(r#"<a href="{href}">{text}</a>"#))
}
