mod common;

use common::{admin, api_for, endpoint, failure, ok};
use serde_json::json;
use store_client::{
    auth::{AuthController, AuthState},
    App, Section, StoreError,
};
use store_config::{Config, MemoryTokenStore};
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn stored_token_fetches_profile_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ok(admin()))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("t1");
    let mut auth = AuthController::new(api_for(&server), Box::new(store.clone()));
    let state = auth.restore().await.unwrap().clone();

    match state {
        AuthState::LoggedIn(session) => assert_eq!(session.user.username, "admin"),
        AuthState::LoggedOut => panic!("expected a restored session"),
    }
    assert_eq!(store.current().as_deref(), Some("t1"));
}

#[tokio::test]
async fn rejected_token_clears_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(failure(401, "invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let store = MemoryTokenStore::with_token("stale");
    let mut auth = AuthController::new(api.clone(), Box::new(store.clone()));

    assert_eq!(auth.restore().await.unwrap(), &AuthState::LoggedOut);
    assert_eq!(store.current(), None);
    assert_eq!(api.token(), None);
    assert!(matches!(
        auth.require_session(),
        Err(StoreError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn no_token_means_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut auth = AuthController::new(api_for(&server), Box::new(MemoryTokenStore::new()));
    assert_eq!(auth.restore().await.unwrap(), &AuthState::LoggedOut);
}

#[tokio::test]
async fn login_persists_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/auth/login")))
        .and(body_json(json!({ "username": "admin", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-1",
            "user": admin(),
            "message": "Login successful"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let store = MemoryTokenStore::new();
    let mut auth = AuthController::new(api.clone(), Box::new(store.clone()));

    let user = auth.login(" admin ", "secret").await.unwrap();
    assert_eq!(user.role, "admin");
    assert!(auth.is_logged_in());
    assert_eq!(store.current().as_deref(), Some("jwt-1"));
    assert_eq!(api.token().as_deref(), Some("jwt-1"));
}

#[tokio::test]
async fn failed_login_keeps_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/auth/login")))
        .respond_with(failure(401, "invalid credentials"))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let mut auth = AuthController::new(api_for(&server), Box::new(store.clone()));

    let err = auth.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
    assert!(!auth.is_logged_in());
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn blank_credentials_are_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut auth = AuthController::new(api_for(&server), Box::new(MemoryTokenStore::new()));
    let err = auth.login("  ", "secret").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
}

#[tokio::test]
async fn failed_profile_refresh_logs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(ok(admin()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(failure(401, "token expired"))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("t1");
    let mut auth = AuthController::new(api_for(&server), Box::new(store.clone()));
    auth.restore().await.unwrap();
    assert!(auth.is_logged_in());

    let err = auth.refresh_profile().await.unwrap_err();
    assert_eq!(err.to_string(), "token expired");
    assert!(!auth.is_logged_in());
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn logout_requires_login_for_every_section() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(ok(admin()))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("t1");
    let mut app = App::with_api(
        api_for(&server),
        &Config::default(),
        Box::new(store.clone()),
    );
    app.auth.restore().await.unwrap();
    assert!(app.open(Section::Dashboard).await.is_ok());

    app.auth.logout().unwrap();
    assert_eq!(store.current(), None);
    assert_eq!(app.api.token(), None);
    for section in Section::ALL {
        assert!(matches!(
            app.open(section).await,
            Err(StoreError::NotAuthenticated)
        ));
    }
}

#[tokio::test]
async fn dashboard_greets_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(ok(admin()))
        .mount(&server)
        .await;

    let mut app = App::with_api(
        api_for(&server),
        &Config::default(),
        Box::new(MemoryTokenStore::with_token("t1")),
    );
    app.auth.restore().await.unwrap();

    match app.open(Section::Dashboard).await.unwrap() {
        store_client::view::View::Menu { title, entries } => {
            assert_eq!(title, "Welcome, admin (admin)!");
            assert!(entries.iter().any(|(name, _)| name == "warehouse"));
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[tokio::test]
async fn display_changes_keep_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(ok(admin()))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("t1");
    let mut app = App::with_api(
        api_for(&server),
        &Config::default(),
        Box::new(store.clone()),
    );
    app.auth.restore().await.unwrap();

    let mut config = Config::default();
    config.set("currency_symbol", "$").unwrap();
    app.apply_display(&config);

    assert!(app.auth.is_logged_in());
    assert_eq!(store.current().as_deref(), Some("t1"));
    assert_eq!(app.format, store_client::format::DisplayFormat::from_config(&config));
}
