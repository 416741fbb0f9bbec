//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior. The
//! server-side route guard is the access boundary; this only keeps the
//! browser from lingering on a protected page after the session ends.
//!
//! The post-login destination rules live here too, so the login page and
//! the server's guard and login handler agree on where a `next` may point.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";

/// Where sign-in lands when no usable `next` was given.
pub const DEFAULT_NEXT: &str = "/client";

/// Post-login destination. Only local absolute paths are honored.
#[must_use]
pub fn safe_next(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(next) if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') => next.to_owned(),
        _ => DEFAULT_NEXT.to_owned(),
    }
}

/// Where the login page should send a visitor who is already signed in.
#[must_use]
pub fn signed_in_destination(state: &SessionState, next: Option<&str>) -> Option<String> {
    state.is_present().then(|| safe_next(next))
}

/// Redirect only once the session is known to be absent, never while unknown.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    matches!(state, SessionState::Absent)
}

/// Redirect to `/login` whenever the session resolves to absent.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
