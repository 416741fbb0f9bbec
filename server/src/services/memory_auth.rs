//! In-process auth provider for development and tests.
//!
//! DESIGN
//! ======
//! Accepts exactly one configured demo account. Issued sessions live in a
//! map keyed by the token digest and expire after a fixed TTL; expired
//! entries are evicted on lookup and on each sign-in.

use std::collections::HashMap;
use std::sync::Arc;

use client::net::types::{Session, SessionUser};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::auth::{AuthError, AuthProvider, ProviderSession};
use super::session::{generate_token, now_unix, token_digest};
use crate::config::DemoAccount;

#[derive(Debug, Clone)]
struct StoredSession {
    expires_at: i64,
}

pub struct MemoryAuthProvider {
    email: String,
    password_digest: String,
    user: SessionUser,
    ttl_secs: i64,
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
    clock: fn() -> i64,
}

impl MemoryAuthProvider {
    #[must_use]
    pub fn new(account: DemoAccount, ttl_secs: i64) -> Self {
        Self::with_clock(account, ttl_secs, now_unix)
    }

    pub(crate) fn with_clock(account: DemoAccount, ttl_secs: i64, clock: fn() -> i64) -> Self {
        let email = account.email.trim().to_ascii_lowercase();
        let user = SessionUser {
            id: Uuid::new_v4().to_string(),
            email: email.clone(),
            name: account.name,
            role: account.role,
        };
        Self {
            email,
            password_digest: token_digest(&account.password),
            user,
            ttl_secs,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of stored, possibly expired, sessions.
    #[cfg(test)]
    pub(crate) async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn credentials_match(&self, email: &str, password: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.email) && token_digest(password) == self.password_digest
    }
}

#[async_trait::async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError> {
        if !self.credentials_match(email, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let now = (self.clock)();
        let token = generate_token();
        let expires_at = now + self.ttl_secs;

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(token_digest(&token), StoredSession { expires_at });

        Ok(ProviderSession { access_token: token, expires_at: Some(expires_at), user: self.user.clone() })
    }

    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        if access_token.is_empty() {
            return Ok(None);
        }
        let key = token_digest(access_token);
        let now = (self.clock)();

        let expires_at = {
            let sessions = self.sessions.read().await;
            match sessions.get(&key) {
                Some(stored) => stored.expires_at,
                None => return Ok(None),
            }
        };

        if expires_at <= now {
            self.sessions.write().await.remove(&key);
            return Ok(None);
        }

        Ok(Some(Session { user: self.user.clone(), expires_at: Some(expires_at) }))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.sessions.write().await.remove(&token_digest(access_token));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[path = "memory_auth_test.rs"]
mod tests;
