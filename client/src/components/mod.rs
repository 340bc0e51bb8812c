//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and route wrappers while reading shared
//! session state from the Leptos context provider.

pub mod guarded_route;
pub mod nav_bar;
