//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is provided as an `RwSignal` context and read by the route
//! guard, the nav bar, and the pages. Every transition goes through the
//! methods below so the token, profile, and `localStorage` stay in step.
//!
//! INVARIANTS
//! ==========
//! `is_authenticated == !token.is_empty()` after `restore`, a successful
//! login, and logout. A failed login or any register call leaves the state
//! untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::{LoginResponse, UserProfile};
use crate::util::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTER_SUCCEEDED: &str = "Registration successful, please login";

/// Authentication state: bearer token, opaque profile, and the derived flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: String,
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
}

/// Result of a login or register attempt, shaped for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { message: Option<String> },
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => message.as_deref(),
            Self::Failure { message } => Some(message.as_str()),
        }
    }
}

impl AuthState {
    /// Rebuild the session from storage. A missing, `null`, or unparseable
    /// profile is treated as absent.
    pub fn restore(storage: &impl SessionStorage) -> Self {
        let token = storage.get_item(TOKEN_KEY).unwrap_or_default();
        let user = storage
            .get_item(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok())
            .filter(|value| !value.is_null());
        let is_authenticated = !token.is_empty();
        Self { token, user, is_authenticated }
    }

    /// Apply the outcome of `POST /auth/login`.
    ///
    /// On success the whole session is overwritten and mirrored to storage;
    /// on failure nothing changes and the server message (or the generic
    /// fallback) is returned.
    pub fn complete_login(
        &mut self,
        result: Result<LoginResponse, ApiError>,
        storage: &impl SessionStorage,
    ) -> AuthOutcome {
        match result {
            Ok(LoginResponse { token, user }) => {
                let user = user.filter(|value| !value.is_null());
                storage.set_item(TOKEN_KEY, &token);
                match &user {
                    Some(profile) => storage.set_item(USER_KEY, &profile.to_string()),
                    None => storage.set_item(USER_KEY, "null"),
                }
                self.is_authenticated = !token.is_empty();
                self.token = token;
                self.user = user;
                log::info!("login succeeded");
                AuthOutcome::Success { message: None }
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                AuthOutcome::Failure { message: err.user_message(LOGIN_FAILED) }
            }
        }
    }

    /// Map the outcome of `POST /auth/register`. Registration never touches
    /// the session, so this takes no state.
    pub fn complete_register(result: Result<(), ApiError>) -> AuthOutcome {
        match result {
            Ok(()) => AuthOutcome::Success { message: Some(REGISTER_SUCCEEDED.to_owned()) },
            Err(err) => {
                log::warn!("registration failed: {err}");
                AuthOutcome::Failure { message: err.user_message(REGISTER_FAILED) }
            }
        }
    }

    /// Clear the session and both storage entries. Local only.
    pub fn logout(&mut self, storage: &impl SessionStorage) {
        self.token.clear();
        self.user = None;
        self.is_authenticated = false;
        storage.remove_item(TOKEN_KEY);
        storage.remove_item(USER_KEY);
        log::info!("logged out");
    }

    /// Read a string-ish field from the stored profile for display.
    pub fn user_field(&self, key: &str) -> Option<String> {
        match self.user.as_ref()?.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Session state bundled with its storage and API client.
///
/// Pages drive `RwSignal<AuthState>` directly; this type is the same flow for
/// callers that own the state outright (tooling, integration tests).
pub struct SessionStore<S: SessionStorage> {
    api: ApiClient,
    storage: S,
    state: AuthState,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store whose state is restored from `storage`.
    pub fn new(api: ApiClient, storage: S) -> Self {
        let state = AuthState::restore(&storage);
        Self { api, storage, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub async fn login(&mut self, username: &str, password: &str) -> AuthOutcome {
        let result = self.api.login(username, password).await;
        self.state.complete_login(result, &self.storage)
    }

    pub async fn register(&self, username: &str, password: &str, email: &str) -> AuthOutcome {
        AuthState::complete_register(self.api.register(username, password, email).await)
    }

    pub fn logout(&mut self) {
        self.state.logout(&self.storage);
    }
}
