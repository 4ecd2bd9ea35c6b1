//! Route table and the navigation guard for protected views.
//!
//! The guard is a pure function of the current [`SessionState`] and the
//! requested route. Views call it on every navigation; nothing is cached.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::SessionState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Every view the site can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Projects,
    Blog,
    BlogPost(String),
    Contact,
    Login,
    Register,
    Admin,
    NotFound,
}

impl AppRoute {
    /// Resolve a URL path. Trailing slashes are ignored; query strings and
    /// fragments are stripped before matching.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["projects"] => Self::Projects,
            ["blog"] => Self::Blog,
            ["blog", id] => Self::BlogPost((*id).to_owned()),
            ["contact"] => Self::Contact,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["admin"] => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none of its own and maps to `/404`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Projects => "/projects".to_owned(),
            Self::Blog => "/blog".to_owned(),
            Self::BlogPost(id) => format!("/blog/{id}"),
            Self::Contact => "/contact".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Admin => "/admin".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// What a view should do with the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session not loaded yet; show a placeholder and ask again later.
    Pending,
    Redirect(&'static str),
}

/// Decide whether `route` may render for `state`.
#[must_use]
pub fn guard(state: &SessionState, route: &AppRoute) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Render;
    }
    match state {
        SessionState::Uninitialized => GuardDecision::Pending,
        SessionState::Authenticated(_) => GuardDecision::Render,
        SessionState::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
    }
}
