//! Account registration page.
//!
//! Registration never signs the user in. A successful call clears the form
//! and points the user at the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::routes::LOGIN_PATH;
use crate::state::auth::{AuthOutcome, AuthState, REGISTER_FAILED};

pub(crate) const MISSING_FIELDS: &str = "Enter a username, email, and password.";
pub(crate) const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Trim username and email, require all three fields, and reject emails
/// without a local part and a domain.
pub(crate) fn validate_register_input(username: &str, password: &str, email: &str) -> Result<RegisterInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || password.is_empty() || email.is_empty() {
        return Err(MISSING_FIELDS);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
        _ => return Err(INVALID_EMAIL),
    }
    Ok(RegisterInput { username: username.to_owned(), password: password.to_owned(), email: email.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<AuthOutcome>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&username.get(), &password.get(), &email.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(Some(AuthOutcome::Failure { message: msg.to_owned() }));
                return;
            }
        };
        busy.set(true);
        info.set(None);

        leptos::task::spawn_local(async move {
            let result = match ApiClient::from_browser() {
                Ok(api) => api.register(&input.username, &input.password, &input.email).await,
                Err(e) => Err(e),
            };
            let outcome = AuthState::complete_register(result);
            if outcome.is_success() {
                username.set(String::new());
                email.set(String::new());
                password.set(String::new());
            }
            info.set(Some(outcome));
            busy.set(false);
        });
    };

    let message_class = move || match info.get() {
        Some(AuthOutcome::Success { .. }) => "auth-message auth-message--success",
        _ => "auth-message auth-message--error",
    };
    let message_text = move || {
        info.get()
            .and_then(|outcome| outcome.message().map(str::to_owned))
            .unwrap_or_else(|| REGISTER_FAILED.to_owned())
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
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
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || info.get().is_some()>
                    <p class=message_class>{message_text}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
