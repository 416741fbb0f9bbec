use super::*;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::Extension;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use crate::state::test_helpers::{demo_token, test_app_state, unavailable_app_state};

// =============================================================================
// is_protected
// =============================================================================

#[test]
fn protected_namespaces() {
    for path in ["/client", "/client/", "/client/journeys/kyoto-private-ateliers", "/admin", "/admin/media"] {
        assert!(is_protected(path), "{path} should be protected");
    }
}

#[test]
fn public_paths_are_not_protected() {
    for path in ["/", "/concept", "/journeys", "/campaigns/linen-after-rain", "/login", "/clients", "/administrator", "/api/auth/session"] {
        assert!(!is_protected(path), "{path} should be public");
    }
}

// =============================================================================
// login_redirect_location
// =============================================================================

#[test]
fn login_query_next_reads_the_parameter() {
    assert_eq!(login_query_next(Some("next=%2Fadmin%3Ftab%3Dmedia&error=invalid")), Some("/admin?tab=media".to_owned()));
    assert_eq!(login_query_next(Some("error=invalid")), None);
    assert_eq!(login_query_next(None), None);
}

#[test]
fn login_redirect_encodes_next() {
    assert_eq!(login_redirect_location("/client"), "/login?next=%2Fclient");
    assert_eq!(login_redirect_location("/admin?tab=media"), "/login?next=%2Fadmin%3Ftab%3Dmedia");
}

// =============================================================================
// require_session middleware
// =============================================================================

fn guarded(state: AppState) -> Router {
    Router::new()
        .route("/client", get(|Extension(session): Extension<Session>| async move { session.user.email }))
        .route("/concept", get(|| async { "public" }))
        .route("/login", get(|| async { "login form" }))
        .layer(axum::middleware::from_fn_with_state(state, require_session))
}

fn request(path: &str, token: Option<&str>) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{COOKIE_NAME}={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn missing_cookie_redirects_to_login() {
    let response = guarded(test_app_state()).oneshot(request("/client", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login?next=%2Fclient");
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn unknown_token_redirects_to_login() {
    let response = guarded(test_app_state())
        .oneshot(request("/client", Some("forged")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn provider_failure_fails_closed() {
    let response = guarded(unavailable_app_state())
        .oneshot(request("/client", Some("anything")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(response.headers()[header::LOCATION].to_str().unwrap().starts_with("/login"));
}

#[tokio::test]
async fn valid_session_reaches_handler_with_extension() {
    let state = test_app_state();
    let token = demo_token(&state).await;
    let response = guarded(state).oneshot(request("/client", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    assert_eq!(body_text(response).await, "camille@example.com");
}

#[tokio::test]
async fn public_paths_skip_the_provider() {
    let response = guarded(unavailable_app_state())
        .oneshot(request("/concept", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    assert_eq!(body_text(response).await, "public");
}

// =============================================================================
// login page while signed in
// =============================================================================

#[tokio::test]
async fn signed_in_login_visit_goes_to_next() {
    let state = test_app_state();
    let token = demo_token(&state).await;
    let response = guarded(state)
        .oneshot(request("/login?next=%2Fadmin", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn signed_in_login_visit_ignores_offsite_next() {
    let state = test_app_state();
    let token = demo_token(&state).await;
    let response = guarded(state)
        .oneshot(request("/login?next=%2F%2Fevil.example", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.headers()[header::LOCATION], "/client");
}

#[tokio::test]
async fn signed_out_login_visit_shows_the_form() {
    let response = guarded(test_app_state())
        .oneshot(request("/login?next=%2Fadmin", Some("stale-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "login form");

    let response = guarded(unavailable_app_state()).oneshot(request("/login", Some("anything"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
