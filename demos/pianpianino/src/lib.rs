//! Pianpianino: a small task manager front end.

pub mod components;
pub mod pages;
pub mod routes;

use pianino::prelude::*;

/// Root layout every page renders into.
pub fn layout(outlet: Html) -> Html {
    Html::new(format!(
        r#"<div class="app"><header class="app__header"><a href="/">Pianpianino</a></header><main class="app__main">{outlet}</main></div>"#
    ))
}

/// The application shell type.
pub type PianpianinoApp = App<fn(Html) -> Html>;

/// Builds the shell: the component library first, then the router.
///
/// The app still has to be mounted. Fails with [`ShellError::Config`] when
/// `config` does not validate.
pub fn create_app(config: &ShellConfig) -> Result<PianpianinoApp, ShellError> {
    config.validate()?;

    let mut app = App::with_config(layout as fn(Html) -> Html, config.clone());

    app.use_plugin(components::ui_library())?
        .use_plugin(RouterPlugin::from_config(routes::routes(), config))?;

    tracing::debug!(plugins = ?app.installed_plugins(), "app created");

    Ok(app)
}
