//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session lives here; pages keep their form state locally.

pub mod auth;
