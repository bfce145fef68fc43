//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, AuthStore};

/// Public route signed-out visitors are sent to.
pub const LANDING_PATH: &str = "/";

/// Whether a guarded route should bounce the visitor.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Redirect to [`LANDING_PATH`] whenever no session is present.
pub fn install_unauth_redirect<F>(auth: AuthStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let state = auth.state();
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigate(LANDING_PATH, NavigateOptions::default());
        }
    });
}
