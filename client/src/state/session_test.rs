use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::types::SessionUser;

fn session(id: &str) -> Session {
    Session {
        user: SessionUser {
            id: id.to_owned(),
            email: format!("{id}@example.com"),
            name: "Camille Roche".to_owned(),
            role: "client".to_owned(),
        },
        expires_at: Some(1_900_000_000),
    }
}

struct StubClient {
    lookup: Result<Option<Session>, String>,
    sign_out: Result<(), String>,
    sign_out_calls: AtomicUsize,
    pushes: Arc<Mutex<Option<AuthListener>>>,
}

impl StubClient {
    fn returning(lookup: Result<Option<Session>, String>) -> Self {
        Self { lookup, sign_out: Ok(()), sign_out_calls: AtomicUsize::new(0), pushes: Arc::new(Mutex::new(None)) }
    }

    /// Deliver `event` to the registered listener, if any.
    fn push(&self, event: AuthEvent) {
        let listener = self.pushes.lock().unwrap().clone();
        if let Some(listener) = listener {
            listener(event);
        }
    }
}

impl AuthClient for StubClient {
    async fn get_session(&self) -> Result<Option<Session>, String> {
        self.lookup.clone()
    }

    async fn sign_out(&self) -> Result<(), String> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out.clone()
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> AuthWatch {
        *self.pushes.lock().unwrap() = Some(listener);
        let pushes = self.pushes.clone();
        AuthWatch::new(move || {
            pushes.lock().unwrap().take();
        })
    }
}

/// Subscribe a listener that records every state it sees.
fn recording(store: &SessionStore) -> (Subscription, Arc<Mutex<Vec<SessionState>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = store.subscribe(move |state: &SessionState| sink.lock().unwrap().push(state.clone()));
    (sub, seen)
}

// =============================================================================
// SessionState
// =============================================================================

#[test]
fn state_defaults_to_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
    assert!(!SessionState::Unknown.is_resolved());
    assert!(SessionState::Absent.is_resolved());
}

#[test]
fn from_lookup_maps_option() {
    assert_eq!(SessionState::from_lookup(None), SessionState::Absent);
    let state = SessionState::from_lookup(Some(session("a")));
    assert!(state.is_present());
    assert_eq!(state.session().map(|s| s.user.id.as_str()), Some("a"));
}

// =============================================================================
// Hydration
// =============================================================================

#[test]
fn new_store_is_unknown_until_hydrated() {
    let store = SessionStore::new();
    assert_eq!(store.current(), SessionState::Unknown);

    block_on(store.hydrate(&StubClient::returning(Ok(Some(session("a"))))));
    assert_eq!(store.current(), SessionState::Present(session("a")));
}

#[test]
fn hydrate_without_session_is_absent() {
    let store = SessionStore::new();
    block_on(store.hydrate(&StubClient::returning(Ok(None))));
    assert_eq!(store.current(), SessionState::Absent);
}

#[test]
fn hydrate_failure_fails_closed() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    block_on(store.hydrate(&StubClient::returning(Err("network down".to_owned()))));
    assert_eq!(store.current(), SessionState::Absent);
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn subscribers_see_each_transition_once() {
    let store = SessionStore::new();
    let (_sub, seen) = recording(&store);

    block_on(store.hydrate(&StubClient::returning(Ok(Some(session("a"))))));
    store.apply(AuthEvent::SignedOut);

    assert_eq!(*seen.lock().unwrap(), vec![SessionState::Present(session("a")), SessionState::Absent]);
}

#[test]
fn unchanged_state_does_not_notify() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    let (_sub, seen) = recording(&store);

    store.apply(AuthEvent::TokenRefreshed(session("a")));
    block_on(store.hydrate(&StubClient::returning(Ok(Some(session("a"))))));

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn last_write_wins_between_hydration_and_push() {
    let store = SessionStore::new();
    store.apply(AuthEvent::SignedIn(session("pushed")));
    block_on(store.hydrate(&StubClient::returning(Ok(Some(session("fetched"))))));
    assert_eq!(store.current(), SessionState::Present(session("fetched")));

    block_on(store.hydrate(&StubClient::returning(Ok(None))));
    store.apply(AuthEvent::SignedIn(session("pushed")));
    assert_eq!(store.current(), SessionState::Present(session("pushed")));
}

// =============================================================================
// Subscription lifecycle
// =============================================================================

#[test]
fn unsubscribe_is_idempotent() {
    let store = SessionStore::new();
    let (mut sub, seen) = recording(&store);
    assert!(sub.is_active());

    sub.unsubscribe();
    sub.unsubscribe();
    assert!(!sub.is_active());
    assert_eq!(store.subscriber_count(), 0);

    store.apply(AuthEvent::SignedOut);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn dropping_subscription_releases_listener() {
    let store = SessionStore::new();
    let (sub, seen) = recording(&store);
    let (_other, other_seen) = recording(&store);
    assert_eq!(store.subscriber_count(), 2);

    drop(sub);
    assert_eq!(store.subscriber_count(), 1);

    store.apply(AuthEvent::SignedOut);
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(other_seen.lock().unwrap().len(), 1);
}

#[test]
fn subscription_outliving_store_unsubscribes_quietly() {
    let store = SessionStore::new();
    let (mut sub, _seen) = recording(&store);
    drop(store);
    assert!(!sub.is_active());
    sub.unsubscribe();
}

#[test]
fn listener_released_mid_notification_is_not_called() {
    let store = SessionStore::new();
    let later: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(AtomicUsize::new(0));

    let release = later.clone();
    let _first = store.subscribe(move |_: &SessionState| {
        release.lock().unwrap().take();
    });
    let counter = calls.clone();
    *later.lock().unwrap() = Some(store.subscribe(move |_: &SessionState| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    store.apply(AuthEvent::SignedOut);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn clones_share_one_store() {
    let store = SessionStore::new();
    let other = store.clone();
    let (_sub, seen) = recording(&store);

    other.apply(AuthEvent::SignedIn(session("a")));
    assert!(store.current().is_present());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

// =============================================================================
// Sign-out
// =============================================================================

#[test]
fn sign_out_clears_session_even_when_provider_fails() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    let mut client = StubClient::returning(Ok(None));
    client.sign_out = Err("provider unavailable".to_owned());

    block_on(store.sign_out(&client));

    assert_eq!(client.sign_out_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.current(), SessionState::Absent);
}

// =============================================================================
// Provider pushes
// =============================================================================

#[test]
fn connected_store_follows_provider_pushes() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    let client = StubClient::returning(Ok(None));
    let (_sub, seen) = recording(&store);
    let _watch = store.connect(&client);

    client.push(AuthEvent::SignedOut);
    client.push(AuthEvent::SignedIn(session("b")));

    assert_eq!(*seen.lock().unwrap(), vec![SessionState::Absent, SessionState::Present(session("b"))]);
}

#[test]
fn dropping_watch_stops_pushes() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    let client = StubClient::returning(Ok(None));
    let watch = store.connect(&client);
    drop(watch);

    client.push(AuthEvent::SignedOut);
    assert_eq!(store.current(), SessionState::Present(session("a")));
}

#[test]
fn inert_watch_drops_cleanly() {
    drop(AuthWatch::inert());
}

// =============================================================================
// Expiry
// =============================================================================

#[test]
fn expire_if_due_signs_out_at_expiry() {
    let store = SessionStore::seeded(SessionState::Present(session("a")));
    let (_sub, seen) = recording(&store);

    assert!(!store.expire_if_due(1_899_999_999));
    assert!(store.current().is_present());

    assert!(store.expire_if_due(1_900_000_000));
    assert_eq!(*seen.lock().unwrap(), vec![SessionState::Absent]);
    assert!(!store.expire_if_due(1_900_000_001));
}

#[test]
fn expire_if_due_ignores_sessions_without_expiry() {
    let mut open_ended = session("a");
    open_ended.expires_at = None;
    let store = SessionStore::seeded(SessionState::Present(open_ended));
    assert!(!store.expire_if_due(i64::MAX));
    assert!(store.current().is_present());
}

#[test]
fn expiry_delay_counts_down_to_expiry() {
    let state = SessionState::Present(session("a"));
    assert_eq!(expiry_delay_ms(&state, 1_899_999_990_000.0), Some(10_000));
    assert_eq!(expiry_delay_ms(&state, 1_900_000_005_000.0), Some(0));
    assert_eq!(expiry_delay_ms(&state, 0.0), Some(MAX_TIMER_DELAY_MS));
}

#[test]
fn expiry_delay_absent_without_session() {
    assert_eq!(expiry_delay_ms(&SessionState::Unknown, 0.0), None);
    assert_eq!(expiry_delay_ms(&SessionState::Absent, 0.0), None);
}
