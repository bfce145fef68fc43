//! Landing page; greets the signed-in user or shows a signed-out notice.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthState, use_auth_store};

/// Greeting line for the current session, if any.
pub(crate) fn greeting(state: &AuthState) -> Option<String> {
    state
        .user()
        .map(|user| format!("Welcome, {} ({})", user.full_name, user.role.label()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_store();
    let state = auth.state();

    view! {
        <main class="home-page">
            <Show
                when=move || state.with(AuthState::is_authenticated)
                fallback=|| view! { <p class="home-page__notice">"You are signed out."</p> }
            >
                <p class="home-page__greeting">
                    {move || state.with(greeting).unwrap_or_default()}
                </p>
                <A href="/account">"Account"</A>
                <button class="home-page__sign-out" on:click=move |_| auth.clear_user()>
                    "Sign out"
                </button>
            </Show>
        </main>
    }
}
