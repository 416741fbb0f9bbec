//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the route guard via the
//! `State` extractor. It carries the configured auth provider and cookie
//! policy; there is no other server-side state. The per-request session is
//! passed through request extensions, never stored here.

use std::sync::Arc;

use crate::services::auth::AuthProvider;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the provider is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>, cookie_secure: bool) -> Self {
        Self { auth, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
