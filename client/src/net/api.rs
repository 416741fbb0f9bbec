//! HTTP auth client used by the browser session store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the server resolves the
//! session from the request itself.
//!
//! CROSS-TAB PUSHES
//! ================
//! A successful sign-out writes a fresh value under [`AUTH_BROADCAST_KEY`] in
//! `localStorage`. Other tabs receive the `storage` event and are pushed
//! `AuthEvent::SignedOut`; the writing tab never sees its own event.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as strings; the session store turns any failure into
//! the signed-out state rather than surfacing it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;
use crate::state::session::{AuthClient, AuthListener, AuthWatch};

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const AUTH_BROADCAST_KEY: &str = "maison:auth";
const SIGNED_OUT_SIGNAL: &str = "signed-out";

/// Broadcast value for a sign-out; `stamp` keeps repeated sign-outs distinct
/// so each one fires a `storage` event.
#[cfg(any(test, feature = "hydrate"))]
fn signed_out_value(stamp: f64) -> String {
    format!("{SIGNED_OUT_SIGNAL}:{stamp}")
}

/// Translate a `storage` event into a push, ignoring unrelated keys.
#[cfg(any(test, feature = "hydrate"))]
fn broadcast_event(key: Option<&str>, new_value: Option<&str>) -> Option<crate::state::session::AuthEvent> {
    if key != Some(AUTH_BROADCAST_KEY) {
        return None;
    }
    new_value
        .and_then(|value| value.split(':').next())
        .filter(|signal| *signal == SIGNED_OUT_SIGNAL)
        .map(|_| crate::state::session::AuthEvent::SignedOut)
}

#[cfg(feature = "hydrate")]
fn broadcast_sign_out() {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if storage
            .set_item(AUTH_BROADCAST_KEY, &signed_out_value(js_sys::Date::now()))
            .is_err()
        {
            log::warn!("could not broadcast sign-out to other tabs");
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_request_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// `401` means "no session", not a failure.
#[cfg(any(test, feature = "hydrate"))]
fn is_unauthenticated_status(status: u16) -> bool {
    status == 401
}

/// Auth client backed by the server's `/api/auth/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthClient;

impl AuthClient for HttpAuthClient {
    async fn get_session(&self) -> Result<Option<Session>, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if is_unauthenticated_status(resp.status()) {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(session_request_failed_message(resp.status()));
            }
            resp.json::<Session>().await.map(Some).map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }

    async fn sign_out(&self) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(logout_failed_message(resp.status()));
            }
            broadcast_sign_out();
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> AuthWatch {
        #[cfg(feature = "hydrate")]
        {
            let handle = leptos::prelude::window_event_listener(leptos::ev::storage, move |ev| {
                if let Some(event) = broadcast_event(ev.key().as_deref(), ev.new_value().as_deref()) {
                    listener(event);
                }
            });
            AuthWatch::new(move || handle.remove())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = listener;
            AuthWatch::inert()
        }
    }
}
