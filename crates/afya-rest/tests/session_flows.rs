//! Session lifecycle tests against a mock backend.
//!
//! These tests use wiremock to simulate the REST backend and exercise the
//! controller's verification, sign-in, and sign-out flows without network
//! access or real credentials.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use afya_core::{BaseUrl, Error, Gate, Route, SessionState, TokenPair, TokenStore};
use afya_rest::{AuthApi, RestClient, SessionController};

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

/// Helper to build a controller and its store against a mock server.
fn controller_with_store(server: &MockServer) -> (SessionController, TokenStore) {
    let store = TokenStore::in_memory();
    let client = RestClient::new(mock_base_url(server), store.clone());
    let controller = SessionController::new(AuthApi::new(client), store.clone());
    (controller, store)
}

/// Helper to mount a profile endpoint answering for the given token.
async fn mount_profile(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me/"))
        .and(header("authorization", format!("Bearer {}", token)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "admin@example.com",
            "name": "Admin User"
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_check_settles_authenticated_with_profile() {
    let server = MockServer::start().await;
    mount_profile(&server, "stored-access").await;

    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    let state = controller.check().await;

    match state {
        SessionState::Authenticated { user } => {
            assert_eq!(user.email, "admin@example.com");
            assert_eq!(user.name, "Admin User");
        }
        other => panic!("expected Authenticated, got {:?}", other),
    }
    assert!(controller.user().is_some());
}

#[tokio::test]
async fn test_check_without_token_skips_the_network() {
    let server = MockServer::start().await;

    let (controller, _store) = controller_with_store(&server);
    let state = controller.check().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(
        server.received_requests().await.unwrap().is_empty(),
        "no request should be made without a stored token"
    );
}

#[tokio::test]
async fn test_check_clears_rejected_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Given token not valid for any token type"
        })))
        .mount(&server)
        .await;

    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("expired-access", "expired-refresh"))
        .unwrap();

    let state = controller.check().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(!store.is_authenticated());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn test_check_invalidates_on_network_failure() {
    let server = MockServer::start().await;
    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    // Shut the backend down; verification must fail closed
    drop(server);

    let state = controller.check().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_state_starts_unknown() {
    let server = MockServer::start().await;
    let (controller, _store) = controller_with_store(&server);

    assert_eq!(controller.state(), SessionState::Unknown);
    assert!(controller.user().is_none());
}

// ============================================================================
// Sign-in Tests
// ============================================================================

#[tokio::test]
async fn test_login_stores_pair_and_settles_authenticated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login/"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "fresh-access",
            "refresh": "fresh-refresh"
        })))
        .mount(&server)
        .await;
    mount_profile(&server, "fresh-access").await;

    let (controller, store) = controller_with_store(&server);
    let user = controller
        .login("admin@example.com", "secret123")
        .await
        .unwrap();

    assert_eq!(user.name, "Admin User");
    assert_eq!(store.access_token().unwrap().as_str(), "fresh-access");
    assert_eq!(store.refresh_token().unwrap().as_str(), "fresh-refresh");
    assert!(controller.state().is_authenticated());
}

#[tokio::test]
async fn test_login_rejected_credentials_leave_no_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let (controller, store) = controller_with_store(&server);
    let err = controller
        .login("admin@example.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AuthenticationFailed));
    assert!(!store.is_authenticated());
    assert_eq!(controller.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_login_profile_failure_clears_fresh_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "fresh-access",
            "refresh": "fresh-refresh"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "profile backend down"
        })))
        .mount(&server)
        .await;

    let (controller, store) = controller_with_store(&server);
    let err = controller
        .login("admin@example.com", "secret123")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => assert_eq!(api.status, 500),
        other => panic!("expected Api error, got {:?}", other),
    }
    // The pair was stored mid-flow; the failed verification must remove it
    assert!(!store.is_authenticated());
    assert_eq!(controller.state(), SessionState::Unauthenticated);
}

// ============================================================================
// Sign-out Tests
// ============================================================================

#[tokio::test]
async fn test_logout_revokes_the_captured_pair() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout/"))
        .and(header("authorization", "Bearer stored-access"))
        .and(body_json(json!({ "refresh": "stored-refresh" })))
        .respond_with(ResponseTemplate::new(205))
        .expect(1)
        .mount(&server)
        .await;

    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    controller.logout().await;

    assert!(!store.is_authenticated());
    assert_eq!(controller.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_survives_unreachable_backend() {
    let server = MockServer::start().await;
    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    drop(server);

    // Must not fail: the local session dies regardless of the backend
    controller.logout().await;

    assert!(!store.is_authenticated());
    assert!(store.refresh_token().is_none());
    assert_eq!(controller.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_without_tokens_skips_the_backend() {
    let server = MockServer::start().await;
    let (controller, store) = controller_with_store(&server);

    controller.logout().await;

    assert!(!store.is_authenticated());
    assert!(
        server.received_requests().await.unwrap().is_empty(),
        "no revoke call should be made without a stored pair"
    );
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_joins_the_name_parts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register/"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "User registered successfully"
        })))
        .mount(&server)
        .await;

    let (controller, store) = controller_with_store(&server);
    controller
        .register("Jane", "Doe", "jane@example.com", "secret123")
        .await
        .unwrap();

    // Registration never signs the account in
    assert!(!store.is_authenticated());
    assert_eq!(controller.state(), SessionState::Unknown);
}

#[tokio::test]
async fn test_register_conflict_carries_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "A user with this email already exists"
        })))
        .mount(&server)
        .await;

    let (controller, _store) = controller_with_store(&server);
    let err = controller
        .register("Jane", "Doe", "jane@example.com", "secret123")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 400);
            assert_eq!(
                api.message.as_deref(),
                Some("A user with this email already exists")
            );
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

// ============================================================================
// Route Gating Tests
// ============================================================================

#[tokio::test]
async fn test_authorize_bounces_signed_in_user_off_auth_pages() {
    let server = MockServer::start().await;
    mount_profile(&server, "stored-access").await;

    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    let gate = controller.authorize(&Route::sign_in()).await;
    assert_eq!(gate, Gate::RedirectToDashboard);

    let gate = controller.authorize(&Route::dashboard()).await;
    assert_eq!(gate, Gate::Proceed);
}

#[tokio::test]
async fn test_authorize_sends_visitors_to_sign_in() {
    let server = MockServer::start().await;
    let (controller, _store) = controller_with_store(&server);

    let gate = controller.authorize(&Route::dashboard()).await;
    assert_eq!(gate, Gate::RedirectToSignIn);

    let gate = controller.authorize(&Route::root()).await;
    assert_eq!(gate, Gate::Proceed);
}

#[tokio::test]
async fn test_authorize_reverifies_every_navigation() {
    let server = MockServer::start().await;
    mount_profile(&server, "stored-access").await;

    let (controller, store) = controller_with_store(&server);
    store
        .store(&TokenPair::new("stored-access", "stored-refresh"))
        .unwrap();

    assert_eq!(
        controller.authorize(&Route::dashboard()).await,
        Gate::Proceed
    );

    // The token disappears between navigations; the next one must notice
    store.clear().unwrap();
    assert_eq!(
        controller.authorize(&Route::dashboard()).await,
        Gate::RedirectToSignIn
    );
}
