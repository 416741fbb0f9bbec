mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,server=debug")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let auth = services::auth::build_provider(&config.auth).expect("auth provider init failed");
    tracing::info!(provider = auth.name(), cookie_secure = config.cookie_secure, "auth provider initialized");

    let state = state::AppState::new(auth, config.cookie_secure);
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "maison listening");
    axum::serve(listener, app).await.expect("server failed");
}
