//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the auth API and Leptos SSR rendering under a single
//! Axum router. The route guard is layered over the merged router so API
//! handlers, SSR routes and the not-found fallback all see the same check.

pub mod auth;
pub mod guard;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Auth API and health routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router for the given Leptos options.
pub fn app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(axum::middleware::from_fn_with_state(state, guard::require_session))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend with options from `[package.metadata.leptos]`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(app(state, conf.leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
