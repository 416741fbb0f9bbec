use super::*;
use crate::state::session::AuthEvent;

#[test]
fn failure_messages_include_status() {
    assert_eq!(session_request_failed_message(502), "session request failed: 502");
    assert_eq!(logout_failed_message(500), "logout failed: 500");
}

#[test]
fn only_401_counts_as_unauthenticated() {
    assert!(is_unauthenticated_status(401));
    assert!(!is_unauthenticated_status(403));
    assert!(!is_unauthenticated_status(500));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_client_reports_unavailable() {
    let result = futures::executor::block_on(HttpAuthClient.get_session());
    assert!(result.is_err());
}

// =============================================================================
// cross-tab broadcast
// =============================================================================

#[test]
fn sign_out_broadcast_becomes_signed_out_push() {
    let value = signed_out_value(1_700_000_000_000.0);
    assert_eq!(broadcast_event(Some(AUTH_BROADCAST_KEY), Some(&value)), Some(AuthEvent::SignedOut));
}

#[test]
fn unrelated_storage_events_are_ignored() {
    let value = signed_out_value(1.0);
    assert_eq!(broadcast_event(Some("theme"), Some(&value)), None);
    assert_eq!(broadcast_event(None, None), None);
    assert_eq!(broadcast_event(Some(AUTH_BROADCAST_KEY), None), None);
    assert_eq!(broadcast_event(Some(AUTH_BROADCAST_KEY), Some("signed-in:1")), None);
}

#[test]
fn repeated_sign_outs_produce_distinct_values() {
    assert_ne!(signed_out_value(1.0), signed_out_value(2.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_client_never_pushes() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let watch = HttpAuthClient.on_auth_state_change(Arc::new(move |_: AuthEvent| flag.store(true, Ordering::SeqCst)));
    drop(watch);
    assert!(!called.load(Ordering::SeqCst));
}
