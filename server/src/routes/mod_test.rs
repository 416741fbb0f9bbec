use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use crate::state::test_helpers::{DEMO_EMAIL, DEMO_PASSWORD, test_app_state, unavailable_app_state};

const SPOTLIGHT_TITLE: &str = "Private Ateliers of Kyoto";

fn test_router(state: AppState) -> Router {
    app(state, LeptosOptions::builder().output_name("maison").build())
}

fn get_request(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in through the API and return the `name=value` cookie pair.
async fn login_cookie(router: &Router) -> String {
    let body = serde_urlencoded::to_string([("email", DEMO_EMAIL), ("password", DEMO_PASSWORD), ("next", "/client")])
        .unwrap();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_owned()
}

#[test]
fn spotlight_fixture_matches_catalog() {
    assert_eq!(catalog::spotlight().map(|j| j.title), Some(SPOTLIGHT_TITLE));
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_router(test_app_state()).oneshot(get_request("/healthz", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unauthenticated_client_redirects_without_protected_content() {
    let response = test_router(test_app_state()).oneshot(get_request("/client", None)).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/login?next=%2Fclient");
    assert!(!body_text(response).await.contains(SPOTLIGHT_TITLE));
}

#[tokio::test]
async fn unauthenticated_nested_client_and_admin_redirect() {
    let router = test_router(test_app_state());
    for path in ["/client/journeys/kyoto-private-ateliers", "/admin"] {
        let response = router.clone().oneshot(get_request(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert!(response.headers()[header::LOCATION].to_str().unwrap().starts_with("/login?next="));
    }
}

#[tokio::test]
async fn unavailable_provider_redirects_client_to_login() {
    let response = test_router(unavailable_app_state())
        .oneshot(get_request("/client", Some("maison_session=anything")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn authenticated_client_renders_spotlight() {
    let router = test_router(test_app_state());
    let cookie = login_cookie(&router).await;

    let response = router.oneshot(get_request("/client", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    assert!(body_text(response).await.contains(SPOTLIGHT_TITLE));
}

#[tokio::test]
async fn authenticated_unknown_client_journey_is_not_found() {
    let router = test_router(test_app_state());
    let cookie = login_cookie(&router).await;

    let response = router
        .clone()
        .oneshot(get_request("/client/journeys/nope", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not found"));

    let response = router
        .oneshot(get_request("/client/journeys/kyoto-private-ateliers", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(SPOTLIGHT_TITLE));
}

#[tokio::test]
async fn signed_in_login_page_redirects_to_next() {
    let router = test_router(test_app_state());
    let cookie = login_cookie(&router).await;

    let response = router.oneshot(get_request("/login?next=%2Fadmin", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn signed_out_login_page_renders_form() {
    let response = test_router(test_app_state())
        .oneshot(get_request("/login?next=%2Fadmin", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Client sign in"));
}

#[tokio::test]
async fn campaign_film_renders_as_video() {
    let response = test_router(test_app_state())
        .oneshot(get_request("/campaigns/desert-tailoring", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<video"));
    assert!(body.contains("/media/campaigns/desert-film.mp4"));
}

#[tokio::test]
async fn unknown_campaign_is_not_found() {
    let response = test_router(test_app_state())
        .oneshot(get_request("/campaigns/does-not-exist", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not found"));
}

#[tokio::test]
async fn known_campaign_renders() {
    let response = test_router(test_app_state())
        .oneshot(get_request("/campaigns/linen-after-rain", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = test_router(test_app_state())
        .oneshot(get_request("/no-such-page", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_endpoint_reflects_login_and_logout() {
    let router = test_router(test_app_state());
    let response = router.clone().oneshot(get_request("/api/auth/session", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = login_cookie(&router).await;
    let response = router
        .clone()
        .oneshot(get_request("/api/auth/session", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, &cookie)
                .header(header::ACCEPT, "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(get_request("/client", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
