//! Login page posting credentials to `/api/auth/login`.
//!
//! The form works without WASM: the server validates the credentials, sets
//! the session cookie and redirects. When hydrated, obviously incomplete
//! input is rejected before the round-trip.
//!
//! A visitor who is already signed in never sees the form: the server guard
//! redirects full page loads, and in-app navigation is redirected here once
//! the session store reports a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionState;
use crate::util::auth::{DEFAULT_NEXT, signed_in_destination};

/// User-facing message for the `error` query parameter set by the server.
pub(crate) fn login_error_message(code: Option<&str>) -> Option<&'static str> {
    match code? {
        "invalid" => Some("That email and password do not match our records."),
        "unavailable" => Some("Sign-in is temporarily unavailable. Please try again shortly."),
        _ => Some("Sign-in failed. Please try again."),
    }
}

/// Trim and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<&'static str>);

    let next = move || query.with(|q| q.get("next")).unwrap_or_else(|| DEFAULT_NEXT.to_owned());
    Effect::new(move || {
        let target = session.with(|state| query.with(|q| signed_in_destination(state, q.get("next").as_deref())));
        if let Some(target) = target {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let message = move || {
        local_error
            .get()
            .or_else(|| query.with(|q| login_error_message(q.get("error").as_deref())))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| match validate_login_input(&email.get(), &password.get()) {
        Ok(_) => local_error.set(None),
        Err(reason) => {
            ev.prevent_default();
            local_error.set(Some(reason));
        }
    };

    view! {
        <Title text="Sign in · Maison Itinérance"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Client sign in"</h1>
                <form class="login-form" method="post" action="/api/auth/login" on:submit=on_submit>
                    <input type="hidden" name="next" value=next/>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                {move || message().map(|text| view! { <p class="login-message" role="alert">{text}</p> })}
            </div>
        </div>
    }
}
