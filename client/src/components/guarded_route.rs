//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entry in the router renders through `GuardedRoute`. The decision is a
//! memo over the session flag, so it is re-evaluated both on navigation and
//! whenever login/logout flips the session while a page is showing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages;
use crate::routes::{GuardDecision, find_route, guard};
use crate::state::auth::AuthState;

/// Render the page registered for `path` if the guard allows it, otherwise
/// replace the current history entry with the redirect target.
#[component]
pub fn GuardedRoute(path: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let route = find_route(path);
    let meta = route.map(|r| r.meta).unwrap_or_default();

    let decision = Memo::new(move |_| guard(meta, auth.with(|s| s.is_authenticated)));

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::debug!("guard redirect {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match (decision.get(), route) {
        (GuardDecision::Allow, Some(route)) => pages::render(route.page),
        _ => ().into_any(),
    }
}
