//! # client
//!
//! Leptos frontend for the Maison Itinérance site: public marketing pages,
//! the session-gated client portal and the admin dashboard.
//!
//! The same crate is compiled twice: with `ssr` for server rendering inside
//! the Axum binary, and with `hydrate` to the WASM bundle that takes over in
//! the browser. Content comes from the `catalog` crate; session state flows
//! through [`state::session::SessionStore`] provided as context by
//! [`app::App`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
