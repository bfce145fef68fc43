//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to decide what to render,
//! and by request code that needs the current access token.
//!
//! DESIGN
//! ======
//! The user and both tokens live together in one `Session`, so the record is
//! either fully populated or empty. Writes go through `AuthStore`, which owns
//! the signal; everything else gets a `ReadSignal` and cannot write.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{LoginUserResponse, User};

/// The authenticated user together with the credentials issued at login.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Session {
    user: User,
    access_token: String,
    refresh_token: String,
}

/// Authentication state: the current user and token pair, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    session: Option<Session>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.refresh_token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Owning handle to the shared auth state.
///
/// `Copy`, so it can be moved into any number of closures and provided as
/// context once at the application root.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    /// Create an unauthenticated store.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Live read-only view of the state. Reactive readers re-run on change.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Untracked copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Replace the user and both tokens in a single write.
    pub fn set_user(&self, user: User, access_token: String, refresh_token: String) {
        log::debug!("auth: session established for {}", user.username);
        self.state.set(AuthState {
            session: Some(Session {
                user,
                access_token,
                refresh_token,
            }),
        });
    }

    /// Install the session carried by a successful login response.
    pub fn set_from_login(&self, resp: LoginUserResponse) {
        self.set_user(resp.user, resp.access_token, resp.refresh_token);
    }

    /// Drop the session. Clearing an empty store notifies no one.
    pub fn clear_user(&self) {
        if !self.state.with_untracked(AuthState::is_authenticated) {
            return;
        }
        log::debug!("auth: session cleared");
        self.state.set(AuthState::default());
    }

    /// Current access token, read without subscribing.
    pub fn access_token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.access_token().map(str::to_owned))
    }

    /// Value for the `authorization` request header, if signed in.
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token().map(|token| format!("Bearer {token}"))
    }
}

/// Create the store and provide it as context for the component tree.
pub fn provide_auth_store() -> AuthStore {
    let store = AuthStore::new();
    provide_context(store);
    store
}

/// Fetch the store provided by the application root.
///
/// # Panics
///
/// Panics when called outside a tree that ran `provide_auth_store`.
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}
