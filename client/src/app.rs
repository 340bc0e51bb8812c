//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded_route::GuardedRoute;
use crate::components::nav_bar::NavBar;
use crate::routes::{HOME_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Restores the session from `localStorage`, provides it as context, and
/// registers one guarded router entry per route in `crate::routes::ROUTES`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore(&BrowserStorage));
    provide_context(auth);

    view! {
        <Title text="PhotoShare"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <GuardedRoute path=HOME_PATH/> }/>
                    <Route path=StaticSegment("login") view=|| view! { <GuardedRoute path=LOGIN_PATH/> }/>
                    <Route path=StaticSegment("register") view=|| view! { <GuardedRoute path=REGISTER_PATH/> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <GuardedRoute path=PROFILE_PATH/> }/>
                </Routes>
            </main>
        </Router>
    }
}
