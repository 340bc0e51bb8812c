//! # photoshare-client
//!
//! Leptos + WASM single-page frontend for the photo-sharing product.
//!
//! This crate contains the route table and navigation guard, the session
//! store that mirrors the bearer token and user profile into `localStorage`,
//! the REST client for the auth endpoints, and the route-level pages.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
