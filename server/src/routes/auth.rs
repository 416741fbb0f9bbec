//! Auth routes: form login, logout and the session probe.

use axum::extract::{Form, FromRef, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::Session;
use client::util::auth::{LOGIN_PATH, safe_next};
use serde::Deserialize;
use time::Duration;

use super::guard::resolve_session;
use crate::services::auth::AuthError;
use crate::services::session::now_unix;
use crate::state::AppState;

pub const COOKIE_NAME: &str = "maison_session";

pub(crate) fn session_cookie(token: String, expires_at: Option<i64>, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    if let Some(expires_at) = expires_at {
        cookie.set_max_age(Duration::seconds((expires_at - now_unix()).max(0)));
    }
    cookie
}

pub(crate) fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// `/login?error=<code>&next=<path>` for a failed sign-in.
pub(crate) fn login_error_location(code: &str, next: &str) -> String {
    match serde_urlencoded::to_string([("error", code), ("next", next)]) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(_) => LOGIN_PATH.to_owned(),
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated session extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub session: Session,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(Self { session: session.clone() });
        }
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let session = resolve_session(&app_state, &jar)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { session })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    next: Option<String>,
}

/// `POST /api/auth/login` — sign in, set cookie, redirect to `next`.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    let next = safe_next(form.next.as_deref());
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Redirect::to(&login_error_location("invalid", &next)).into_response();
    }

    match state.auth.sign_in(email, &form.password).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, provider = state.auth.name(), "signed in");
            let cookie = session_cookie(session.access_token, session.expires_at, state.cookie_secure);
            (jar.add(cookie), Redirect::to(&next)).into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!(provider = state.auth.name(), "sign-in rejected");
            Redirect::to(&login_error_location("invalid", &next)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, provider = state.auth.name(), "sign-in failed");
            Redirect::to(&login_error_location("unavailable", &next)).into_response()
        }
    }
}

/// `POST /api/auth/logout` — revoke the session, clear the cookie.
///
/// Browsers posting the header form get a redirect home; `fetch` callers
/// asking for JSON get `204`.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();
    if !token.is_empty() {
        if let Err(e) = state.auth.sign_out(&token).await {
            tracing::warn!(error = %e, provider = state.auth.name(), "provider sign-out failed; clearing cookie anyway");
        }
    }

    let jar = jar.add(cleared_cookie(state.cookie_secure));
    if wants_json(&headers) {
        (jar, StatusCode::NO_CONTENT).into_response()
    } else {
        (jar, Redirect::to("/")).into_response()
    }
}

/// `GET /api/auth/session` — current session or `401`.
pub async fn session(auth: AuthUser) -> Json<Session> {
    Json(auth.session)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
