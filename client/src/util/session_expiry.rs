//! Local sign-out when the cached session reaches its expiry.
//!
//! The provider does not push expiry, so the tab schedules it: whenever the
//! session signal changes, any pending timer is dropped (which cancels it)
//! and a new one is armed for the current session's `expires_at`.

use leptos::prelude::*;

use crate::state::session::{SessionState, SessionStore};

/// Arm an expiry timer that follows `session`. The timer lives in the
/// effect's value, so it is cancelled when the owning scope is cleaned up.
pub fn install_expiry_watch(store: SessionStore, session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::expiry_delay_ms;

        Effect::new(move |_previous: Option<Option<gloo_timers::callback::Timeout>>| {
            let delay = session.with(|state| expiry_delay_ms(state, js_sys::Date::now()))?;
            let store = store.clone();
            Some(gloo_timers::callback::Timeout::new(delay, move || {
                #[allow(clippy::cast_possible_truncation)]
                let now_unix = (js_sys::Date::now() / 1000.0) as i64;
                store.expire_if_due(now_unix);
            }))
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, session);
    }
}
