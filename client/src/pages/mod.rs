//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and talks to the session through the
//! `RwSignal<AuthState>` context. Access control is not a page concern: the
//! route guard decides whether a page is constructed at all.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;

use leptos::prelude::*;

use crate::routes::Page;
use home::HomePage;
use login::LoginPage;
use profile::ProfilePage;
use register::RegisterPage;

/// Construct the view for `page`. Called only after the guard allows it.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
    }
}
