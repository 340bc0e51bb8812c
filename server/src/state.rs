//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for all proxied calls plus the proxy
//! settings it was built from.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::error::ProxyError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub proxy: Arc<ProxyConfig>,
}

impl AppState {
    /// Build the upstream client. Redirects are passed back to the browser
    /// untouched; certificate checks follow `proxy.secure`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(proxy: ProxyConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(!proxy.secure)
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, proxy: Arc::new(proxy) })
    }
}
