//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the auth calls and `types` defines the wire schema.

pub mod api;
pub mod types;
