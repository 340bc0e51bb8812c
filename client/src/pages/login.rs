//! Username + password login page.
//!
//! On success the session flips to authenticated and the guard on this
//! guest-only route sends the user to `/`; the page never navigates itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::routes::REGISTER_PATH;
use crate::state::auth::{AuthState, LOGIN_FAILED};
use crate::util::storage::BrowserStorage;

pub(crate) const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are sent verbatim.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            let result = match ApiClient::from_browser() {
                Ok(api) => api.login(&username_value, &password_value).await,
                Err(e) => Err(e),
            };
            let outcome = auth.try_update(|s| s.complete_login(result, &BrowserStorage));
            busy.set(false);
            match outcome {
                Some(outcome) if outcome.is_success() => password.set(String::new()),
                Some(outcome) => info.set(outcome.message().unwrap_or(LOGIN_FAILED).to_owned()),
                None => info.set(LOGIN_FAILED.to_owned()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
