//! `/api` reverse proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA calls `/api/...` on its own origin. This handler forwards those
//! requests, path and query unchanged, to the configured backend origin and
//! streams nothing: bodies are small JSON payloads and are buffered whole.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers scoped to a single connection; never forwarded in either direction.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

pub(crate) fn upstream_url(target: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", target.trim_end_matches('/'))
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers. `content-length` is recomputed from the buffered
/// body; `host` is dropped when the upstream should see its own origin.
pub(crate) fn filter_headers(headers: &HeaderMap, keep_host: bool) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        if name == header::HOST && !keep_host {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Forward one request to the upstream API and relay its response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.proxy.target, path_and_query);

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;
    let headers = filter_headers(&parts.headers, !state.proxy.change_origin);

    tracing::debug!(method = %parts.method, %url, "proxying");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), true);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
