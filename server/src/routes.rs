//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api` proxy and the health check, then serves the built SPA for
//! everything else. Unknown paths fall back to `index.html` so client-side
//! routes like `/profile` survive a full page reload.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

pub fn app(state: AppState, site_root: &Path) -> Router {
    let spa = ServeDir::new(site_root).fallback(ServeFile::new(site_root.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(proxy::forward))
        .route("/api/{*rest}", any(proxy::forward))
        .with_state(state)
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
