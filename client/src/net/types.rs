//! Session DTOs shared across the client/server boundary.
//!
//! DESIGN
//! ======
//! The server attaches a [`Session`] to protected requests after the route
//! guard validates the cookie, and serves the same shape from
//! `/api/auth/session`. The provider's access token never appears here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned user identifier.
    pub id: String,
    pub email: String,
    /// Display name; may be empty when the provider has none.
    #[serde(default)]
    pub name: String,
    /// Provider role claim (e.g. `"client"`, `"admin"`).
    #[serde(default)]
    pub role: String,
}

impl SessionUser {
    /// Name to greet the user with, falling back to the email local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.split_whitespace().next().unwrap_or(name);
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Authenticated session as seen by the page layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Expiry as Unix seconds, when the provider reports one.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now_unix)
    }
}
