//! Route guard for the client and admin namespaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! `require_session` is layered over the whole router, API and SSR alike, so
//! every protected path passes through the same check before any handler
//! runs. On success the page-facing [`Session`] is inserted into request
//! extensions, where SSR reads it to seed the client session store.
//!
//! FAIL CLOSED
//! ===========
//! A missing cookie, an unknown token and a provider failure all redirect to
//! the login page. Provider failures are logged but never surfaced.
//!
//! The login page itself is not protected, but a visitor who already holds a
//! valid session is sent straight on to its `next` instead of the form.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::CACHE_CONTROL;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::net::types::Session;
use client::util::auth::{LOGIN_PATH, safe_next};
use serde::Deserialize;

use super::auth::COOKIE_NAME;
use crate::state::AppState;

const PROTECTED_PREFIXES: [&str; 2] = ["/client", "/admin"];

/// Whether `path` is inside a protected namespace (the prefix itself or
/// anything below it, not mere string prefixes like `/clients`).
#[must_use]
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

#[derive(Debug, Default, Deserialize)]
struct LoginQuery {
    next: Option<String>,
}

/// The `next` parameter of a login page query string.
fn login_query_next(query: Option<&str>) -> Option<String> {
    serde_urlencoded::from_str::<LoginQuery>(query?).ok()?.next
}

/// `/login?next=<path>` with the return path form-encoded.
#[must_use]
pub fn login_redirect_location(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(_) => LOGIN_PATH.to_owned(),
    }
}

/// Resolve the request's session cookie through the provider.
pub(crate) async fn resolve_session(state: &AppState, jar: &CookieJar) -> Option<Session> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    match state.auth.get_session(token).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, provider = state.auth.name(), "session check failed; treating as signed out");
            None
        }
    }
}

/// Axum middleware enforcing a session on protected paths.
pub async fn require_session(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if path == LOGIN_PATH {
        let jar = CookieJar::from_headers(request.headers());
        if resolve_session(&state, &jar).await.is_some() {
            let target = safe_next(login_query_next(request.uri().query()).as_deref());
            tracing::debug!(target = %target, "already signed in; skipping login page");
            return Redirect::to(&target).into_response();
        }
        return next.run(request).await;
    }
    if !is_protected(&path) {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    let Some(session) = resolve_session(&state, &jar).await else {
        let requested = request
            .uri()
            .path_and_query()
            .map_or(path.as_str(), |pq| pq.as_str())
            .to_owned();
        tracing::debug!(path = %path, "no session; redirecting to login");
        return Redirect::to(&login_redirect_location(&requested)).into_response();
    };

    request.extensions_mut().insert(session);
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
