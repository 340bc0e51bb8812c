//! Proxy error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced while forwarding a request upstream.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The shared HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The incoming request body could not be read.
    #[error("request body read failed: {0}")]
    Body(String),

    /// The upstream request failed or its response could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self, status = status.as_u16(), "proxy request failed");
        let message = match &self {
            Self::Body(_) => "Invalid request body",
            Self::Upstream(_) => "Upstream API unavailable",
            Self::ClientBuild(_) => "Proxy misconfigured",
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
