//! Supabase GoTrue auth provider.
//!
//! Thin HTTP wrapper over the GoTrue REST endpoints:
//! `POST /auth/v1/token?grant_type=password`, `GET /auth/v1/user` and
//! `POST /auth/v1/logout`. Response parsing lives in pure functions for
//! testability. Requests are bounded by a single timeout and never retried.

use std::time::Duration;

use client::net::types::{Session, SessionUser};
use serde::Deserialize;

use super::auth::{AuthError, AuthProvider, ProviderSession};
use super::session::now_unix;

const CONNECT_TIMEOUT_SECS: u64 = 3;
const DEFAULT_ROLE: &str = "client";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseAuthProvider {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthProvider {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: String, anon_key: String, timeout_secs: u64) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), anon_key })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError> {
        let response = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        match status {
            200 => parse_token_response(&text, now_unix()),
            400 | 401 | 422 => Err(AuthError::InvalidCredentials),
            _ => Err(AuthError::UnexpectedResponse { status, body: text }),
        }
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        if access_token.is_empty() {
            return Ok(None);
        }
        let response = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        match status {
            200 => parse_user_response(&text).map(|user| Some(Session { user, expires_at: None })),
            401 | 403 => Ok(None),
            _ => Err(AuthError::UnexpectedResponse { status, body: text }),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status().as_u16();
        // An already-revoked token is as good as a successful revoke.
        if response.status().is_success() || status == 401 || status == 403 {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::UnexpectedResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: GoTrueUser,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
    #[serde(default)]
    app_metadata: serde_json::Value,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_token_response(text: &str, now: i64) -> Result<ProviderSession, AuthError> {
    let token: TokenResponse = serde_json::from_str(text)
        .map_err(|e| AuthError::UnexpectedResponse { status: 200, body: format!("{e}: {text}") })?;
    let expires_at = session_expiry(token.expires_at, token.expires_in, now);
    Ok(ProviderSession { access_token: token.access_token, expires_at, user: user_from_gotrue(token.user) })
}

fn parse_user_response(text: &str) -> Result<SessionUser, AuthError> {
    let user: GoTrueUser = serde_json::from_str(text)
        .map_err(|e| AuthError::UnexpectedResponse { status: 200, body: format!("{e}: {text}") })?;
    Ok(user_from_gotrue(user))
}

/// Absolute expiry wins; otherwise derive it from the relative lifetime.
fn session_expiry(expires_at: Option<i64>, expires_in: Option<i64>, now: i64) -> Option<i64> {
    expires_at.or_else(|| expires_in.map(|secs| now + secs))
}

fn user_from_gotrue(user: GoTrueUser) -> SessionUser {
    let name = ["full_name", "name"]
        .iter()
        .find_map(|key| user.user_metadata.get(key).and_then(serde_json::Value::as_str))
        .unwrap_or_default()
        .to_owned();
    let role = user
        .app_metadata
        .get("role")
        .and_then(serde_json::Value::as_str)
        .unwrap_or(DEFAULT_ROLE)
        .to_owned();
    SessionUser { id: user.id, email: user.email.unwrap_or_default(), name, role }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
