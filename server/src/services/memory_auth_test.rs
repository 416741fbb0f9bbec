use super::*;

fn account() -> DemoAccount {
    DemoAccount {
        email: "camille@example.com".to_owned(),
        password: "indigo-season".to_owned(),
        name: "Camille Laurent".to_owned(),
        role: "client".to_owned(),
    }
}

fn fixed_now() -> i64 {
    1_700_000_000
}

#[tokio::test]
async fn sign_in_with_valid_credentials_issues_session() {
    let provider = MemoryAuthProvider::with_clock(account(), 3600, fixed_now);
    let session = provider.sign_in("Camille@Example.com ", "indigo-season").await.unwrap();

    assert_eq!(session.access_token.len(), 64);
    assert_eq!(session.expires_at, Some(fixed_now() + 3600));
    assert_eq!(session.user.email, "camille@example.com");
    assert_eq!(session.user.name, "Camille Laurent");

    let resolved = provider.get_session(&session.access_token).await.unwrap();
    assert_eq!(resolved, Some(Session { user: session.user.clone(), expires_at: session.expires_at }));
}

#[tokio::test]
async fn sign_in_rejects_wrong_password_or_email() {
    let provider = MemoryAuthProvider::new(account(), 3600);
    assert!(matches!(
        provider.sign_in("camille@example.com", "wrong").await,
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        provider.sign_in("other@example.com", "indigo-season").await,
        Err(AuthError::InvalidCredentials)
    ));
    assert_eq!(provider.session_count().await, 0);
}

#[tokio::test]
async fn unknown_or_empty_token_is_absent() {
    let provider = MemoryAuthProvider::new(account(), 3600);
    assert_eq!(provider.get_session("").await.unwrap(), None);
    assert_eq!(provider.get_session("not-a-token").await.unwrap(), None);
}

#[tokio::test]
async fn tokens_are_stored_as_digests() {
    let provider = MemoryAuthProvider::new(account(), 3600);
    let session = provider.sign_in("camille@example.com", "indigo-season").await.unwrap();
    let sessions = provider.sessions.read().await;
    assert!(!sessions.contains_key(&session.access_token));
    assert!(sessions.contains_key(&token_digest(&session.access_token)));
}

#[tokio::test]
async fn expired_session_is_absent_and_evicted() {
    // A zero-length TTL expires at the instant of issue.
    let provider = MemoryAuthProvider::with_clock(account(), 0, fixed_now);
    let session = provider.sign_in("camille@example.com", "indigo-season").await.unwrap();
    assert_eq!(provider.session_count().await, 1);

    assert_eq!(provider.get_session(&session.access_token).await.unwrap(), None);
    assert_eq!(provider.session_count().await, 0);
}

#[tokio::test]
async fn sign_out_revokes_and_is_idempotent() {
    let provider = MemoryAuthProvider::new(account(), 3600);
    let session = provider.sign_in("camille@example.com", "indigo-season").await.unwrap();

    provider.sign_out(&session.access_token).await.unwrap();
    assert_eq!(provider.get_session(&session.access_token).await.unwrap(), None);
    provider.sign_out(&session.access_token).await.unwrap();
}

#[tokio::test]
async fn each_sign_in_gets_a_distinct_token() {
    let provider = MemoryAuthProvider::new(account(), 3600);
    let a = provider.sign_in("camille@example.com", "indigo-season").await.unwrap();
    let b = provider.sign_in("camille@example.com", "indigo-season").await.unwrap();
    assert_ne!(a.access_token, b.access_token);
    assert_eq!(a.user.id, b.user.id);
    assert_eq!(provider.session_count().await, 2);
}
