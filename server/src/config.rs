//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before parsing. Parsing goes through a lookup
//! function so tests can supply variables without touching the process
//! environment.

use std::collections::HashMap;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: i64 = 8 * 60 * 60;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Single account accepted by the in-memory provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthProviderConfig {
    /// In-process sessions for development and tests.
    Memory { account: DemoAccount, session_ttl_secs: i64 },
    /// Supabase GoTrue REST API.
    Supabase { url: String, anon_key: String, timeout_secs: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthProviderConfig,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// - `PORT`: default 3000
    /// - `AUTH_PROVIDER`: `memory` (default) or `supabase`
    /// - memory: `DEMO_EMAIL`, `DEMO_PASSWORD` (required), `DEMO_NAME`,
    ///   `DEMO_ROLE` (default `client`), `SESSION_TTL_SECS` (default 8h)
    /// - supabase: `SUPABASE_URL`, `SUPABASE_ANON_KEY` (required),
    ///   `AUTH_PROVIDER_TIMEOUT_SECS` (default 5)
    /// - `COOKIE_SECURE`: bool; defaults to whether `SUPABASE_URL` is https
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an explicit variable map.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };

        let auth = match non_empty(&lookup, "AUTH_PROVIDER").as_deref().unwrap_or("memory") {
            "memory" => AuthProviderConfig::Memory {
                account: DemoAccount {
                    email: required(&lookup, "DEMO_EMAIL")?.to_ascii_lowercase(),
                    password: required(&lookup, "DEMO_PASSWORD")?,
                    name: non_empty(&lookup, "DEMO_NAME").unwrap_or_default(),
                    role: non_empty(&lookup, "DEMO_ROLE").unwrap_or_else(|| "client".to_owned()),
                },
                session_ttl_secs: parse_positive(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?,
            },
            "supabase" => AuthProviderConfig::Supabase {
                url: required(&lookup, "SUPABASE_URL")?.trim_end_matches('/').to_owned(),
                anon_key: required(&lookup, "SUPABASE_ANON_KEY")?,
                timeout_secs: parse_positive(&lookup, "AUTH_PROVIDER_TIMEOUT_SECS", DEFAULT_PROVIDER_TIMEOUT_SECS)?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    var: "AUTH_PROVIDER",
                    reason: format!("unknown provider '{other}' (expected 'memory' or 'supabase')"),
                });
            }
        };

        let cookie_secure = match non_empty(&lookup, "COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::Invalid { var: "COOKIE_SECURE", reason: format!("not a boolean: {raw}") })?,
            None => matches!(&auth, AuthProviderConfig::Supabase { url, .. } if url.starts_with("https://")),
        };

        Ok(Self { port, auth, cookie_secure })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<String, ConfigError> {
    non_empty(lookup, key).ok_or(ConfigError::Missing(key))
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = non_empty(lookup, key) else {
        return Ok(default);
    };
    let value = raw.parse::<T>().map_err(|e| ConfigError::Invalid { var: key, reason: e.to_string() })?;
    if value <= T::default() {
        return Err(ConfigError::Invalid { var: key, reason: "must be greater than zero".to_owned() });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
