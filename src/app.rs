//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ShellConfig;
#[cfg(feature = "csr")]
use crate::error::MountError;
use crate::pages::{account::AccountPage, home::HomePage};
use crate::state::auth::provide_auth_store;
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Provides the auth store and UI state contexts, applies the stored theme
/// and sets up client-side routing.
#[component]
pub fn App(config: ShellConfig) -> impl IntoView {
    provide_meta_context();

    provide_auth_store();

    let initial_theme = theme::read_preference();
    theme::apply(initial_theme);
    provide_context(RwSignal::new(UiState { theme: initial_theme }));

    view! {
        <Stylesheet id="bank-web" href=config.stylesheet_href/>
        <Title text=config.title/>

        <Router>
            <header class="app-header">
                <ThemeToggle/>
            </header>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}

/// Mount [`App`] into the element whose id is `config.mount_id`.
///
/// # Errors
///
/// Returns a [`MountError`] when there is no document or the mount point is
/// missing or not an HTML element.
#[cfg(feature = "csr")]
pub fn mount(config: ShellConfig) -> Result<(), MountError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(&config.mount_id)
        .ok_or_else(|| MountError::MissingElement(config.mount_id.clone()))?;
    let parent = element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(config.mount_id.clone()))?;

    log::info!("mounting app into #{}", config.mount_id);
    leptos::mount::mount_to(parent, move || view! { <App config=config/> }).forget();
    Ok(())
}
