//! REST API client for the backend auth endpoints.
//!
//! Browser builds talk to `<origin>/api`, which the dev server proxies to the
//! real backend. Native builds (tests, tooling) pass an explicit base URL.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-success statuses keep the
//! server's `message` so the session store can surface it unchanged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, RegisterRequest, error_message};
use crate::error::ApiError;

/// Path prefix the dev server proxies to the backend.
pub const API_PREFIX: &str = "/api";

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Thin wrapper around a shared `reqwest::Client` and the API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Client rooted at the current page origin plus `/api`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Browser` when there is no `window` (non-browser
    /// builds always take this path).
    pub fn from_browser() -> Result<Self, ApiError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_owned()))?;
            let origin = window
                .location()
                .origin()
                .map_err(|_| ApiError::Browser("location origin unavailable".to_owned()))?;
            Ok(Self::new(format!("{origin}{API_PREFIX}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Browser("not running in a browser".to_owned()))
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// success body without a usable token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = self.post(LOGIN_PATH, &body).await?;
        let login: LoginResponse = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        if login.token.is_empty() {
            return Err(ApiError::Parse("login response carried an empty token".to_owned()));
        }
        Ok(login)
    }

    /// `POST /auth/register`. The success body is not interpreted.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> Result<(), ApiError> {
        let body = RegisterRequest {
            username: username.to_owned(),
            password: password.to_owned(),
            email: email.to_owned(),
        };
        self.post(REGISTER_PATH, &body).await?;
        Ok(())
    }

    async fn post<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response, ApiError> {
        let url = endpoint(&self.base_url, path);
        log::debug!("POST {url}");
        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        Err(ApiError::Response { status: status.as_u16(), message: error_message(&text) })
    }
}
