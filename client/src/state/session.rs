//! Session store for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider owns the session; this store holds a read-only cached
//! copy and fans out transitions to subscribers (the root component mirrors
//! it into a signal, route gates read that signal).
//!
//! DESIGN
//! ======
//! - State is a tagged [`SessionState`]; "loading" is `Unknown`, never a flag.
//! - Hydration failure degrades to `Absent` so protected UI fails closed.
//! - Hydration results and provider pushes race freely; last write wins.
//!   Pushes arrive through [`AuthClient::on_auth_state_change`] once the
//!   store is [`connect`](SessionStore::connect)ed, and from the expiry timer
//!   via [`SessionStore::expire_if_due`].
//! - Listeners run outside the lock and are re-checked before each call, so
//!   a released [`Subscription`] is never notified.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::types::Session;

/// Cached view of the provider's session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet resolved. Protected content must not render.
    #[default]
    Unknown,
    Present(Session),
    Absent,
}

impl SessionState {
    /// Map a resolved provider lookup onto a state.
    #[must_use]
    pub fn from_lookup(session: Option<Session>) -> Self {
        session.map_or(Self::Absent, Self::Present)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Present(session) => Some(session),
            Self::Unknown | Self::Absent => None,
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Auth-state notification pushed by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

/// Receiver for provider pushes.
pub type AuthListener = Arc<dyn Fn(AuthEvent) + Send + Sync>;

/// Registration with a provider's push channel. Dropping it stops delivery.
pub struct AuthWatch {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl AuthWatch {
    #[must_use]
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Watch for a provider that never pushes.
    #[must_use]
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for AuthWatch {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Provider operations the store needs.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Fetch the current session; `Ok(None)` when signed out.
    async fn get_session(&self) -> Result<Option<Session>, String>;
    async fn sign_out(&self) -> Result<(), String>;
    /// Deliver provider-initiated transitions to `listener` until the
    /// returned watch is dropped.
    fn on_auth_state_change(&self, listener: AuthListener) -> AuthWatch;
}

/// Longest delay a browser timer honors; larger values fire immediately.
pub const MAX_TIMER_DELAY_MS: u32 = 2_147_483_647;

/// Milliseconds until a present session expires, clamped to
/// `0..=MAX_TIMER_DELAY_MS`. `None` when there is nothing to expire.
#[must_use]
pub fn expiry_delay_ms(state: &SessionState, now_unix_ms: f64) -> Option<u32> {
    let expires_at = state.session()?.expires_at?;
    #[allow(clippy::cast_precision_loss)]
    let delay = expires_at as f64 * 1000.0 - now_unix_ms;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(delay.clamp(0.0, f64::from(MAX_TIMER_DELAY_MS)) as u32)
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct Shared {
    state: SessionState,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared handle to the tab's session state. Clones share one store.
#[derive(Clone)]
pub struct SessionStore {
    shared: Arc<Mutex<Shared>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store that has not heard from the provider yet.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(SessionState::Unknown)
    }

    /// Store starting from a state resolved elsewhere (server request, document seed).
    #[must_use]
    pub fn seeded(state: SessionState) -> Self {
        Self { shared: Arc::new(Mutex::new(Shared { state, next_id: 0, listeners: Vec::new() })) }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn current(&self) -> SessionState {
        self.lock().state.clone()
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Register a listener for state transitions.
    ///
    /// The listener is not called with the current state; read
    /// [`SessionStore::current`] for that.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let mut shared = self.lock();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.listeners.push((id, Arc::new(listener)));
        Subscription { id, shared: Arc::downgrade(&self.shared), released: false }
    }

    /// Resolve the session from the provider. Never fails: errors become `Absent`.
    pub async fn hydrate<C: AuthClient>(&self, client: &C) {
        let next = match client.get_session().await {
            Ok(session) => SessionState::from_lookup(session),
            Err(e) => {
                log::warn!("session hydration failed, treating as signed out: {e}");
                SessionState::Absent
            }
        };
        self.set(next);
    }

    /// Apply a provider push notification.
    pub fn apply(&self, event: AuthEvent) {
        let next = match event {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => SessionState::Present(session),
            AuthEvent::SignedOut => SessionState::Absent,
        };
        self.set(next);
    }

    /// Route the client's pushes into [`SessionStore::apply`].
    #[must_use]
    pub fn connect<C: AuthClient>(&self, client: &C) -> AuthWatch {
        let store = self.clone();
        client.on_auth_state_change(Arc::new(move |event| store.apply(event)))
    }

    /// Push `SignedOut` if the present session has expired by `now_unix`.
    pub fn expire_if_due(&self, now_unix: i64) -> bool {
        let expired = self.current().session().is_some_and(|s| s.is_expired_at(now_unix));
        if expired {
            log::info!("session expired; signing out locally");
            self.apply(AuthEvent::SignedOut);
        }
        expired
    }

    /// Sign out with the provider. The local state becomes `Absent` even if
    /// the provider call fails.
    pub async fn sign_out<C: AuthClient>(&self, client: &C) {
        if let Err(e) = client.sign_out().await {
            log::warn!("provider sign-out failed: {e}");
        }
        self.set(SessionState::Absent);
    }

    /// Replace the state, notifying listeners when it actually changed.
    fn set(&self, next: SessionState) -> bool {
        let listeners: Vec<(u64, Listener)> = {
            let mut shared = self.lock();
            if shared.state == next {
                return false;
            }
            shared.state = next.clone();
            shared.listeners.clone()
        };

        for (id, listener) in listeners {
            if self.is_subscribed(id) {
                listener(&next);
            }
        }
        true
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.lock().listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    shared: Weak<Mutex<Shared>>,
    released: bool,
}

impl Subscription {
    /// Remove the listener. Safe to call any number of times, and after the
    /// store itself is gone.
    pub fn unsubscribe(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(shared) = self.shared.upgrade() {
            let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
            shared.listeners.retain(|(id, _)| *id != self.id);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        !self.released && self.shared.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
