//! Session store against an in-process mock of the auth backend.
//!
//! The mock accepts `ana` / `correct-horse` and rejects everything else with
//! a JSON `message`. Registration fails for the username `taken`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use photoshare_client::net::api::ApiClient;
use photoshare_client::routes::{GuardDecision, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH, guard_path};
use photoshare_client::state::auth::{AuthOutcome, AuthState, LOGIN_FAILED, REGISTER_SUCCEEDED, SessionStore};
use photoshare_client::util::storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Default)]
struct Seen {
    register_bodies: Vec<Value>,
}

async fn login(Json(body): Json<Value>) -> Response {
    let user = body["username"].as_str().unwrap_or_default();
    let pass = body["password"].as_str().unwrap_or_default();
    match (user, pass) {
        ("ana", "correct-horse") => Json(json!({
            "token": "tok-ana",
            "user": { "id": 1, "username": "ana", "email": "ana@example.com" }
        }))
        .into_response(),
        ("silent", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ("notoken", _) => Json(json!({ "user": { "id": 9 } })).into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response(),
    }
}

async fn spawn_backend() -> (String, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let seen_register = seen.clone();
    let app = Router::new().route("/api/auth/login", post(login)).route(
        "/api/auth/register",
        post(move |Json(body): Json<Value>| {
            let seen = seen_register.clone();
            async move {
                let taken = body["username"] == "taken";
                seen.lock().await.register_bodies.push(body);
                if taken {
                    (StatusCode::CONFLICT, Json(json!({ "message": "Username already exists" }))).into_response()
                } else {
                    (StatusCode::CREATED, "User registered").into_response()
                }
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), seen)
}

async fn fresh_store() -> (SessionStore<MemoryStorage>, Arc<Mutex<Seen>>) {
    let (base, seen) = spawn_backend().await;
    (SessionStore::new(ApiClient::new(base), MemoryStorage::new()), seen)
}

#[tokio::test]
async fn login_success_authenticates_and_persists() {
    let (mut store, _) = fresh_store().await;
    assert!(!store.is_authenticated());
    assert_eq!(guard_path(PROFILE_PATH, store.is_authenticated()), GuardDecision::Redirect(LOGIN_PATH));

    let outcome = store.login("ana", "correct-horse").await;

    assert!(outcome.is_success());
    assert!(store.is_authenticated());
    assert_eq!(store.state().token, "tok-ana");
    assert_eq!(store.storage().get_item(TOKEN_KEY).as_deref(), Some("tok-ana"));
    let stored: Value = serde_json::from_str(&store.storage().get_item(USER_KEY).unwrap()).unwrap();
    assert_eq!(Some(stored), store.state().user);
    assert_eq!(guard_path(PROFILE_PATH, true), GuardDecision::Allow);
    assert_eq!(guard_path(REGISTER_PATH, store.is_authenticated()), GuardDecision::Redirect("/"));
}

#[tokio::test]
async fn restored_store_sees_previous_login() {
    let (base, _) = spawn_backend().await;
    let storage = MemoryStorage::new();
    {
        let mut store = SessionStore::new(ApiClient::new(base.clone()), &storage);
        assert!(store.login("ana", "correct-horse").await.is_success());
    }
    let reopened = SessionStore::new(ApiClient::new(base), &storage);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.state().user_field("username").as_deref(), Some("ana"));
}

#[tokio::test]
async fn failed_login_keeps_prior_session_and_returns_server_message() {
    let (mut store, _) = fresh_store().await;
    assert!(store.login("ana", "correct-horse").await.is_success());
    let before = store.state().clone();

    let outcome = store.login("ana", "wrong").await;

    assert_eq!(outcome, AuthOutcome::Failure { message: "Invalid credentials".to_owned() });
    assert_eq!(store.state(), &before);
    assert_eq!(store.storage().get_item(TOKEN_KEY).as_deref(), Some("tok-ana"));
}

#[tokio::test]
async fn failed_login_without_message_uses_fallback() {
    let (mut store, _) = fresh_store().await;
    let outcome = store.login("silent", "x").await;
    assert_eq!(outcome.message(), Some(LOGIN_FAILED));
    assert!(!store.is_authenticated());
    assert!(store.storage().is_empty());
}

#[tokio::test]
async fn login_response_without_token_is_a_failure() {
    let (mut store, _) = fresh_store().await;
    let outcome = store.login("notoken", "x").await;
    assert!(!outcome.is_success());
    assert_eq!(store.state(), &AuthState::default());
}

#[tokio::test]
async fn unreachable_backend_reports_fallback() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let mut store = SessionStore::new(ApiClient::new(format!("http://{addr}/api")), MemoryStorage::new());
    let outcome = store.login("ana", "correct-horse").await;
    assert_eq!(outcome.message(), Some(LOGIN_FAILED));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn register_never_touches_session() {
    let (mut store, seen) = fresh_store().await;

    let ok = store.register("bo", "pw", "bo@example.com").await;
    assert_eq!(ok, AuthOutcome::Success { message: Some(REGISTER_SUCCEEDED.to_owned()) });
    assert!(!store.is_authenticated());
    assert!(store.storage().is_empty());

    assert!(store.login("ana", "correct-horse").await.is_success());
    let signed_in = store.state().clone();
    let failed = store.register("taken", "pw", "t@example.com").await;
    assert_eq!(failed.message(), Some("Username already exists"));
    assert_eq!(store.state(), &signed_in);

    let seen = seen.lock().await;
    assert_eq!(seen.register_bodies.len(), 2);
    assert_eq!(seen.register_bodies[0],json!({ "username": "bo", "password": "pw", "email": "bo@example.com" }));
}

#[tokio::test]
async fn logout_clears_session_and_storage() {
    let (mut store, _) = fresh_store().await;
    assert!(store.login("ana", "correct-horse").await.is_success());

    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.state().token.is_empty());
    assert!(store.state().user.is_none());
    assert_eq!(store.storage().get_item(TOKEN_KEY), None);
    assert_eq!(store.storage().get_item(USER_KEY), None);
    assert_eq!(guard_path(PROFILE_PATH, store.is_authenticated()), GuardDecision::Redirect(LOGIN_PATH));
}
