//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::PROFILE_PATH;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = move || greeting(auth.with(|s| s.user_field("username")).as_deref());

    view! {
        <section class="home-page">
            <h1>{title}</h1>
            <p class="home-page__lead">"Share your photos with friends."</p>
            <A href=PROFILE_PATH>"View your profile"</A>
        </section>
    }
}

fn greeting(username: Option<&str>) -> String {
    match username {
        Some(name) if !name.is_empty() => format!("Welcome back, {name}"),
        _ => "Welcome back".to_owned(),
    }
}
