//! Profile page showing the stored user record.
//!
//! Logging out clears the session; the guard on this route then redirects to
//! `/login`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Profile fields shown on the page, in display order.
const PROFILE_FIELDS: &[(&str, &str)] = &[("username", "Username"), ("email", "Email"), ("id", "User ID")];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let rows = move || {
        let state = auth.get();
        PROFILE_FIELDS
            .iter()
            .filter_map(|(key, label)| state.user_field(key).map(|value| (*label, value)))
            .map(|(label, value)| {
                view! {
                    <div class="profile-row">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                }
            })
            .collect_view()
    };

    let on_logout = move |_: leptos::ev::MouseEvent| auth.update(|s| s.logout(&BrowserStorage));

    view! {
        <section class="profile-page">
            <h1>"Your profile"</h1>
            <Show
                when=move || auth.with(|s| s.user.is_some())
                fallback=|| view! { <p class="profile-page__empty">"No profile details stored."</p> }
            >
                <dl class="profile-fields">{rows}</dl>
            </Show>
            <button class="auth-button auth-button--secondary" on:click=on_logout>
                "Log out"
            </button>
        </section>
    }
}
