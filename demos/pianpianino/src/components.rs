//! The UI component library installed before the router.

use pianino::{ComponentLibrary, Html};

/// Name the library installs under.
pub const LIBRARY: &str = "naive";

/// Builds the component library plugin.
pub fn ui_library() -> ComponentLibrary {
    ComponentLibrary::new(LIBRARY)
        .component("n-button", button)
        .component("n-card", card)
        .component("n-input", input)
        .component("n-space", space)
}

fn button(children: Html) -> Html {
    Html::new(format!(r#"<button type="button" class="n-button">{children}</button>"#))
}

fn card(children: Html) -> Html {
    Html::new(format!(r#"<div class="n-card"><div class="n-card__content">{children}</div></div>"#))
}

// children is the field label
fn input(children: Html) -> Html {
    Html::new(format!(
        r#"<label class="n-input"><span class="n-input__label">{children}</span><input class="n-input__input" /></label>"#
    ))
}

fn space(children: Html) -> Html {
    Html::new(format!(r#"<div class="n-space">{children}</div>"#))
}
