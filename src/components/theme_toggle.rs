//! Header button that switches between light and dark themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            type="button"
            on:click=move |_| ui.update(|s| s.theme = theme::toggle(s.theme))
        >
            {move || ui.get().theme.toggle_label()}
        </button>
    }
}
