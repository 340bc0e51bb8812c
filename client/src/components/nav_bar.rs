//! Top navigation bar.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{HOME_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// `(path, label)` pairs shown for the current session.
pub(crate) fn nav_links(is_authenticated: bool) -> &'static [(&'static str, &'static str)] {
    if is_authenticated {
        &[(HOME_PATH, "Home"), (PROFILE_PATH, "Profile")]
    } else {
        &[(LOGIN_PATH, "Sign in"), (REGISTER_PATH, "Register")]
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(|s| s.is_authenticated);

    let links = move || {
        nav_links(signed_in())
            .iter()
            .map(|(path, label)| view! { <A href=*path>{*label}</A> })
            .collect_view()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"PhotoShare"</span>
            <div class="nav-bar__links">{links}</div>
            <Show when=signed_in>
                <button
                    class="nav-bar__logout"
                    on:click=move |_| auth.update(|s| s.logout(&BrowserStorage))
                >
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
