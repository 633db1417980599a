//! Routing surface of the app.
//!
//! Every path the app navigates to is an [`AppRoute`]; unknown paths resolve
//! to the loading screen the same way the router's wildcard does.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;

/// Routed views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Loading screen at `/`.
    Root,
    Profiles,
    Recruiter,
    DeveloperLogin,
    DeveloperCode,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] =
        [Self::Root, Self::Profiles, Self::Recruiter, Self::DeveloperLogin, Self::DeveloperCode];

    /// Routes the navigation guard is attached to.
    pub const GUARDED: [AppRoute; 4] = [Self::Profiles, Self::Recruiter, Self::DeveloperLogin, Self::DeveloperCode];

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Profiles => "/profiles",
            Self::Recruiter => "/recruiter",
            Self::DeveloperLogin => "/developer/login",
            Self::DeveloperCode => "/developer/code",
        }
    }

    /// Resolve a location path. Query strings, fragments, and a trailing slash
    /// are ignored; anything unknown maps to [`AppRoute::Root`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .unwrap_or(Self::Root)
    }

    pub fn is_guarded(self) -> bool {
        !matches!(self, Self::Root)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
