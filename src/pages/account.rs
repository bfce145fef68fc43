//! Account page showing the signed-in user's profile.
//!
//! Guarded: signed-out visitors are sent back to the landing route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth_store;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth_store();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let state = auth.state();

    view! {
        <main class="account-page">
            <h1>"Account"</h1>
            {move || {
                state
                    .with(|s| s.user().cloned())
                    .map(|user| {
                        let verified = if user.is_email_verified { "Yes" } else { "No" };
                        view! {
                            <dl class="account-page__fields">
                                <dt>"Username"</dt>
                                <dd>{user.username}</dd>
                                <dt>"Full name"</dt>
                                <dd>{user.full_name}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Email verified"</dt>
                                <dd>{verified}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.label()}</dd>
                                <dt>"Member since"</dt>
                                <dd>{user.created_at}</dd>
                            </dl>
                        }
                    })
            }}
        </main>
    }
}
