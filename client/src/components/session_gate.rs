//! Wrapper for protected page content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Render `children` only while a session is present.
///
/// `Unknown` shows a pending notice, `Absent` shows a redirect notice and
/// navigates to the login page.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let pending = move || {
        let notice = if session.with(SessionState::is_resolved) {
            "Redirecting to sign in..."
        } else {
            "Checking your session..."
        };
        view! { <p class="session-gate__notice">{notice}</p> }
    };

    view! {
        <Show when=move || session.with(SessionState::is_present) fallback=pending>
            {children()}
        </Show>
    }
}
