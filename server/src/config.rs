//! Server configuration parsed from environment variables.
//!
//! Variables:
//! - `PORT`: listen port (default 3000)
//! - `API_PROXY_TARGET`: origin that `/api` requests are forwarded to
//! - `API_PROXY_CHANGE_ORIGIN`: rewrite `Host` to the target (default true)
//! - `API_PROXY_SECURE`: verify the target's TLS certificate (default true)
//! - `SITE_ROOT`: directory holding the built SPA (default `client/dist`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_PROXY_TARGET: &str = "https://imagesharebackend-a9bahdacgugcg5bd.francecentral-01.azurewebsites.net";
pub const DEFAULT_SITE_ROOT: &str = "client/dist";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Reverse-proxy settings for the `/api` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Target origin without a trailing slash.
    pub target: String,
    pub change_origin: bool,
    pub secure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub proxy: ProxyConfig,
    pub site_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            proxy: ProxyConfig { target: DEFAULT_API_PROXY_TARGET.to_owned(), change_origin: true, secure: true },
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => defaults.port,
        };

        let target = match lookup("API_PROXY_TARGET") {
            Some(raw) => parse_target(&raw)?,
            None => defaults.proxy.target,
        };

        let change_origin = lookup_bool(&lookup, "API_PROXY_CHANGE_ORIGIN")?.unwrap_or(defaults.proxy.change_origin);
        let secure = lookup_bool(&lookup, "API_PROXY_SECURE")?.unwrap_or(defaults.proxy.secure);
        let site_root = lookup("SITE_ROOT").map_or(defaults.site_root, PathBuf::from);

        Ok(Self { port, proxy: ProxyConfig { target, change_origin, secure }, site_root })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    match lookup(key) {
        Some(raw) => parse_bool(&raw).map(Some).ok_or(ConfigError::Invalid { key, value: raw }),
        None => Ok(None),
    }
}

fn parse_target(raw: &str) -> Result<String, ConfigError> {
    let target = raw.trim().trim_end_matches('/');
    if !(target.starts_with("http://") || target.starts_with("https://")) {
        return Err(ConfigError::Invalid { key: "API_PROXY_TARGET", value: raw.to_owned() });
    }
    Ok(target.to_owned())
}
