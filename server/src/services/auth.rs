//! Auth provider seam.
//!
//! DESIGN
//! ======
//! Route handlers and the route guard talk to an [`AuthProvider`] trait
//! object so the hosted provider (Supabase GoTrue) and the in-process demo
//! provider are interchangeable. Providers own the session: the server only
//! forwards the opaque access token held in the session cookie.
//!
//! ERROR HANDLING
//! ==============
//! `AuthError::InvalidCredentials` is a user error; everything else means the
//! provider could not answer, which callers treat as "not authenticated".

use std::sync::Arc;

use client::net::types::{Session, SessionUser};

use crate::config::AuthProviderConfig;

use super::memory_auth::MemoryAuthProvider;
use super::supabase::SupabaseAuthProvider;

/// Session as issued by a provider, including the bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    /// Unix seconds.
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("auth provider unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected auth provider response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
    #[error("auth http client build failed: {0}")]
    HttpClientBuild(String),
}

#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange credentials for a new session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError>;

    /// Resolve a token to its session. `Ok(None)` when unknown or expired.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;

    /// Revoke a token. Revoking an unknown token succeeds.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

/// Build the provider selected by configuration.
///
/// # Errors
///
/// Returns an error if the provider HTTP client cannot be built.
pub fn build_provider(config: &AuthProviderConfig) -> Result<Arc<dyn AuthProvider>, AuthError> {
    match config {
        AuthProviderConfig::Memory { account, session_ttl_secs } => {
            Ok(Arc::new(MemoryAuthProvider::new(account.clone(), *session_ttl_secs)))
        }
        AuthProviderConfig::Supabase { url, anon_key, timeout_secs } => Ok(Arc::new(SupabaseAuthProvider::new(
            url.clone(),
            anon_key.clone(),
            *timeout_secs,
        )?)),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
