//! Initial session state for server rendering and hydration.
//!
//! DESIGN
//! ======
//! During SSR the route guard has already resolved the session and attached
//! it to the request; [`initial_session_state`] reads it from the request
//! parts. The shell embeds the same state as a JSON seed so the hydrating
//! client starts from what the markup was rendered with instead of from
//! `Unknown`. A missing or unreadable seed leaves the client `Unknown` until
//! the hydration fetch resolves.

#[cfg(test)]
#[path = "session_seed_test.rs"]
mod session_seed_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Session;
use crate::state::session::SessionState;

/// `id` of the `<script type="application/json">` element holding the seed.
pub const SEED_ELEMENT_ID: &str = "session-seed";

#[derive(Debug, Serialize, Deserialize)]
struct SessionSeed {
    session: Option<Session>,
}

/// Serialize a resolved state for embedding in a `<script>` element.
///
/// `Unknown` encodes as an empty string. `<` is escaped so user-controlled
/// text cannot close the script element.
#[must_use]
pub fn encode_seed(state: &SessionState) -> String {
    let seed = match state {
        SessionState::Unknown => return String::new(),
        SessionState::Present(session) => SessionSeed { session: Some(session.clone()) },
        SessionState::Absent => SessionSeed { session: None },
    };
    serde_json::to_string(&seed)
        .map(|json| json.replace('<', "\\u003c"))
        .unwrap_or_default()
}

/// Parse a seed produced by [`encode_seed`]. Anything unreadable is `Unknown`.
#[must_use]
pub fn decode_seed(raw: &str) -> SessionState {
    let raw = raw.trim();
    if raw.is_empty() {
        return SessionState::Unknown;
    }
    match serde_json::from_str::<SessionSeed>(raw) {
        Ok(seed) => SessionState::from_lookup(seed.session),
        Err(e) => {
            log::warn!("ignoring malformed session seed: {e}");
            SessionState::Unknown
        }
    }
}

/// Session state the current render should start from.
#[must_use]
pub fn initial_session_state() -> SessionState {
    #[cfg(feature = "ssr")]
    {
        request_session_state()
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        document_session_state()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        SessionState::Unknown
    }
}

/// Session attached to the request by the server route guard.
#[cfg(feature = "ssr")]
fn request_session_state() -> SessionState {
    let session = leptos::prelude::use_context::<http::request::Parts>()
        .and_then(|parts| parts.extensions.get::<Session>().cloned());
    SessionState::from_lookup(session)
}

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
fn document_session_state() -> SessionState {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SEED_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .map_or(SessionState::Unknown, |raw| decode_seed(&raw))
}
