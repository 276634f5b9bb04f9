//! Declared route table and path helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each declared view carries a `requires_auth` flag; the navigation gate
//! reads it per destination. Destinations missing from the table are public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::GateConfig;

/// Metadata attached to a declared destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
}

/// Site root; it only forwards to [`ROOT_REDIRECT`].
pub const ROOT_PATH: &str = "/";
pub const ROOT_REDIRECT: &str = "/login";

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/login", title: "Sign In", requires_auth: false },
    RouteEntry { path: "/register", title: "Register", requires_auth: false },
    RouteEntry { path: "/data-management", title: "Data Management", requires_auth: true },
    RouteEntry { path: "/data-analysis", title: "Data Analysis", requires_auth: true },
    RouteEntry { path: "/model-training", title: "Model Training", requires_auth: true },
    RouteEntry { path: "/student-feedback", title: "Student Feedback", requires_auth: true },
    RouteEntry { path: "/teacher-dashboard", title: "Teacher Dashboard", requires_auth: true },
    RouteEntry { path: "/visualization", title: "Visualization", requires_auth: true },
    RouteEntry { path: "/profile", title: "Profile", requires_auth: true },
];

/// Strip any `?query` and `#fragment` from a full path.
pub fn path_of(full: &str) -> &str {
    let end = full.find(['?', '#']).unwrap_or(full.len());
    &full[..end]
}

/// Join a router pathname and search string into a full path.
///
/// `search` may be given with or without its leading `?`.
pub fn full_path(pathname: &str, search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Look up the declared entry for a destination.
pub fn route_for(destination: &str) -> Option<&'static RouteEntry> {
    let path = path_of(destination);
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Whether a destination is a protected view. Undeclared paths are not.
pub fn requires_auth(destination: &str) -> bool {
    route_for(destination).is_some_and(|entry| entry.requires_auth)
}

/// Where to send the user once login completes.
///
/// Called by the login view with its `redirect` query value after
/// [`crate::state::session::sign_in`] succeeds.
///
/// Honors the preserved `redirect` destination when it is a local absolute
/// path outside the auth pages; anything else lands on the home view.
pub fn post_login_target<'a>(redirect: Option<&'a str>, config: &'a GateConfig) -> &'a str {
    match redirect.map(str::trim) {
        Some(target)
            if target.starts_with('/')
                && !target.starts_with("//")
                && !config.is_auth_page(path_of(target)) =>
        {
            target
        }
        _ => &config.home_path,
    }
}
