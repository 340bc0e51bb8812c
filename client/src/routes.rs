//! Static route table and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers one router entry per descriptor below and wraps each page
//! in `GuardedRoute`, which consults `guard` against the session before the
//! page is constructed. Everything here is plain data so the access rules can
//! be tested without a browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

/// Page a route renders. Pages are only constructed once their route matches
/// and the guard allows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Profile,
}

/// Access requirements attached to a route.
///
/// A route with neither flag set is open to everyone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const AUTH: Self = Self { requires_auth: true, requires_guest: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_guest: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub meta: RouteMeta,
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: HOME_PATH, name: "Home", page: Page::Home, meta: RouteMeta::AUTH },
    RouteDescriptor { path: LOGIN_PATH, name: "Login", page: Page::Login, meta: RouteMeta::GUEST },
    RouteDescriptor { path: REGISTER_PATH, name: "Register", page: Page::Register, meta: RouteMeta::GUEST },
    RouteDescriptor { path: PROFILE_PATH, name: "Profile", page: Page::Profile, meta: RouteMeta::AUTH },
];

/// Look up the descriptor registered for `path` (exact match).
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

/// What the router should do with a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether a navigation to a route with `meta` may proceed.
///
/// Signed-in users are bounced off guest-only pages to `/`; anonymous users
/// are sent to `/login` for pages that need a session. Anything else passes.
pub fn guard(meta: RouteMeta, is_authenticated: bool) -> GuardDecision {
    if meta.requires_guest && is_authenticated {
        return GuardDecision::Redirect(HOME_PATH);
    }
    if meta.requires_auth && !is_authenticated {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Allow
}

/// Guard decision for a concrete path. Paths outside the table carry no
/// metadata and fall through to `Allow`.
pub fn guard_path(path: &str, is_authenticated: bool) -> GuardDecision {
    let meta = find_route(path).map(|route| route.meta).unwrap_or_default();
    guard(meta, is_authenticated)
}
