use super::*;
use crate::net::types::Role;
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================
// Helpers
// =============================================================

fn make_user(username: &str) -> User {
    User {
        username: username.to_owned(),
        role: Role::Depositor,
        full_name: "Test User".to_owned(),
        email: format!("{username}@example.com"),
        password_changed_at: "0001-01-01T00:00:00Z".to_owned(),
        created_at: "2024-03-01T12:00:00Z".to_owned(),
        is_email_verified: false,
    }
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

fn assert_consistent(state: &AuthState) {
    let present = [
        state.user().is_some(),
        state.access_token().is_some(),
        state.refresh_token().is_some(),
    ];
    assert!(
        present.iter().all(|p| *p) || present.iter().all(|p| !*p),
        "partial auth state: {state:?}"
    );
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_empty() {
    let state = AuthState::default();
    assert!(state.user().is_none());
    assert!(state.access_token().is_none());
    assert!(state.refresh_token().is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// AuthStore
// =============================================================

#[test]
fn new_store_is_unauthenticated() {
    with_owner(|| {
        let store = AuthStore::new();
        assert_eq!(store.state().get_untracked(), AuthState::default());
    });
}

#[test]
fn set_user_populates_all_fields() {
    with_owner(|| {
        let store = AuthStore::new();
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());

        let state = store.snapshot();
        assert_eq!(state.user(), Some(&make_user("u1")));
        assert_eq!(state.access_token(), Some("tokA"));
        assert_eq!(state.refresh_token(), Some("tokB"));
        assert!(state.is_authenticated());
    });
}

#[test]
fn set_user_replaces_previous_session() {
    with_owner(|| {
        let store = AuthStore::new();
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        store.set_user(make_user("u2"), "tokC".to_owned(), "tokD".to_owned());

        let state = store.snapshot();
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("u2"));
        assert_eq!(state.access_token(), Some("tokC"));
        assert_eq!(state.refresh_token(), Some("tokD"));
    });
}

#[test]
fn clear_user_returns_to_initial_state() {
    with_owner(|| {
        let store = AuthStore::new();
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        store.clear_user();
        assert_eq!(store.snapshot(), AuthState::default());
    });
}

#[test]
fn clear_user_is_idempotent() {
    with_owner(|| {
        let store = AuthStore::new();
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        store.clear_user();
        let once = store.snapshot();
        store.clear_user();
        assert_eq!(store.snapshot(), once);
        assert_eq!(once, AuthState::default());
    });
}

#[test]
fn clear_user_on_empty_store_is_noop() {
    with_owner(|| {
        let store = AuthStore::new();
        store.clear_user();
        assert_eq!(store.snapshot(), AuthState::default());
    });
}

#[test]
fn clear_user_on_empty_store_notifies_no_one() {
    with_owner(|| {
        let store = AuthStore::new();
        let view = store.state();
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_in_memo = Arc::clone(&runs);
        let signed_in = Memo::new(move |_| {
            runs_in_memo.fetch_add(1, Ordering::SeqCst);
            view.with(AuthState::is_authenticated)
        });

        assert!(!signed_in.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.clear_user();
        assert!(!signed_in.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        assert!(signed_in.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn set_from_login_matches_set_user() {
    with_owner(|| {
        let resp = LoginUserResponse {
            session_id: "s-1".to_owned(),
            access_token: "tokA".to_owned(),
            access_token_expires_at: "2024-03-01T12:15:00Z".to_owned(),
            refresh_token: "tokB".to_owned(),
            refresh_token_expires_at: "2024-03-02T12:00:00Z".to_owned(),
            user: make_user("u1"),
        };
        let from_login = AuthStore::new();
        from_login.set_from_login(resp);

        let direct = AuthStore::new();
        direct.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());

        assert_eq!(from_login.snapshot(), direct.snapshot());
    });
}

#[test]
fn read_only_view_tracks_mutations() {
    with_owner(|| {
        let store = AuthStore::new();
        let view = store.state();

        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        assert_eq!(view.with_untracked(|s| s.access_token().map(str::to_owned)), Some("tokA".to_owned()));

        store.clear_user();
        assert!(!view.with_untracked(AuthState::is_authenticated));
    });
}

#[test]
fn derived_observer_sees_updates_without_refetch() {
    with_owner(|| {
        let store = AuthStore::new();
        let view = store.state();
        let signed_in = Memo::new(move |_| view.with(AuthState::is_authenticated));

        assert!(!signed_in.get_untracked());
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        assert!(signed_in.get_untracked());
        store.clear_user();
        assert!(!signed_in.get_untracked());
    });
}

#[test]
fn snapshot_is_detached_from_store() {
    with_owner(|| {
        let store = AuthStore::new();
        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());

        let mut copy = store.snapshot();
        copy.session = None;
        assert!(!copy.is_authenticated());
        assert!(store.snapshot().is_authenticated());
    });
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    with_owner(|| {
        let store = AuthStore::new();
        assert_eq!(store.authorization_header(), None);

        store.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        assert_eq!(store.access_token(), Some("tokA".to_owned()));
        assert_eq!(store.authorization_header(), Some("Bearer tokA".to_owned()));

        store.clear_user();
        assert_eq!(store.authorization_header(), None);
    });
}

#[test]
fn context_round_trip() {
    with_owner(|| {
        let provided = provide_auth_store();
        provided.set_user(make_user("u1"), "tokA".to_owned(), "tokB".to_owned());
        let used = use_auth_store();
        assert_eq!(used.snapshot(), provided.snapshot());
    });
}

// =============================================================
// Call-sequence fuzzing
// =============================================================

#[derive(Clone, Debug)]
enum Op {
    Set(String, String, String),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z][a-z0-9]{0,8}", "[A-Za-z0-9]{0,16}", "[A-Za-z0-9]{0,16}")
            .prop_map(|(u, a, r)| Op::Set(u, a, r)),
        Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn state_is_never_partial(ops in prop::collection::vec(op_strategy(), 0..32)) {
        with_owner(|| {
            let store = AuthStore::new();

            assert_eq!(store.snapshot(), AuthState::default());
            for op in ops {
                let expected = match op {
                    Op::Set(u, a, r) => {
                        store.set_user(make_user(&u), a.clone(), r.clone());
                        Some((u, a, r))
                    }
                    Op::Clear => {
                        store.clear_user();
                        None
                    }
                };

                let state = store.snapshot();
                assert_consistent(&state);
                match &expected {
                    Some((u, a, r)) => {
                        assert_eq!(state.user().map(|x| x.username.as_str()), Some(u.as_str()));
                        assert_eq!(state.access_token(), Some(a.as_str()));
                        assert_eq!(state.refresh_token(), Some(r.as_str()));
                    }
                    None => assert_eq!(state, AuthState::default()),
                }
            }
        });
    }
}
