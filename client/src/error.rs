//! Client error types.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` stays typed inside `net`; the session store converts it into a
//! user-facing message at the edge so pages never see a raw transport error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by REST calls against the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, CORS, abort).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("response error: status {status}")]
    Response { status: u16, message: Option<String> },

    /// A success response carried a body we could not use.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The browser environment is missing something we need (no `window`).
    #[error("browser unavailable: {0}")]
    Browser(String),
}

impl ApiError {
    /// Message to show the user: the server's `message` when one was sent,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Response { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
