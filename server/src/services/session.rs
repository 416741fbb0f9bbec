//! Session token helpers.
//!
//! ARCHITECTURE
//! ============
//! The browser holds an opaque random token in an `HttpOnly` cookie. Server
//! side stores only its SHA-256 digest so a dump of the session table never
//! yields a usable cookie value.

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Hex SHA-256 of a session token, used as the storage key.
#[must_use]
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Current wall-clock time as Unix seconds.
#[must_use]
pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
