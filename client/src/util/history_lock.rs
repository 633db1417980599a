//! History locks: back/forward and reload handling per view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router guard only sees router-mediated navigation. Back/forward and
//! reload bypass it, so each locked view rewrites its own history entry on
//! entry and reacts to `popstate` / `beforeunload` itself. The app root adds a
//! shell-level lock ([`ShellLock`]) on top.
//!
//! DESIGN
//! ======
//! Lock operations mutate the session store directly and return the browser
//! side effects as [`NavEffect`] values, applied in order by
//! [`run_effects`]. The browser adapter lives in [`crate::util::browser`].

#[cfg(test)]
#[path = "history_lock_test.rs"]
mod history_lock_test;

use crate::state::session::SessionEvent;
use crate::state::store::{SessionKey, SessionStore, StorageBackend};
use crate::util::route::AppRoute;

/// Browser-side effect requested by a lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    /// Router navigation to a route.
    Navigate(AppRoute),
    /// Overwrite the current history entry (`history.replaceState`).
    ReplaceHistory(AppRoute),
}

/// Target for [`NavEffect`]s.
pub trait Navigation {
    fn navigate(&mut self, route: AppRoute);
    fn replace_history(&mut self, route: AppRoute);
}

/// Apply effects in order.
pub fn run_effects<N: Navigation + ?Sized>(effects: &[NavEffect], nav: &mut N) {
    for effect in effects {
        match *effect {
            NavEffect::Navigate(route) => nav.navigate(route),
            NavEffect::ReplaceHistory(route) => nav.replace_history(route),
        }
    }
}

/// Per-view lock parameters.
///
/// Unload cleanup is the same for every view and goes through
/// [`SessionEvent::Unload`], so it is not a per-view parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryLock {
    pub own: AppRoute,
    pub redirect: AppRoute,
    pub cleared_on_exit: &'static [SessionKey],
}

impl HistoryLock {
    pub const LOADING: HistoryLock = HistoryLock {
        own: AppRoute::Root,
        redirect: AppRoute::Root,
        cleared_on_exit: &[],
    };

    pub const DEVELOPER_LOGIN: HistoryLock = HistoryLock {
        own: AppRoute::DeveloperLogin,
        redirect: AppRoute::Root,
        cleared_on_exit: &[SessionKey::SelectedProfile, SessionKey::PortfolioAccess],
    };

    pub const CODE_VIEWER: HistoryLock = HistoryLock {
        own: AppRoute::DeveloperCode,
        redirect: AppRoute::Root,
        cleared_on_exit: &SessionKey::DURABLE,
    };

    /// Lock installed by the view at `route`.
    ///
    /// Profile selection relies on the guard alone. Recruiter home defers to
    /// the shell lock, which lets back navigation proceed while a profile is
    /// set.
    pub fn for_route(route: AppRoute) -> Option<&'static HistoryLock> {
        match route {
            AppRoute::Root => Some(&Self::LOADING),
            AppRoute::DeveloperLogin => Some(&Self::DEVELOPER_LOGIN),
            AppRoute::DeveloperCode => Some(&Self::CODE_VIEWER),
            AppRoute::Profiles | AppRoute::Recruiter => None,
        }
    }

    /// Runs synchronously during view setup, before any request is issued.
    pub fn on_enter(&self) -> Vec<NavEffect> {
        vec![NavEffect::ReplaceHistory(self.own)]
    }

    /// Back/forward pressed while the view is active.
    ///
    /// History is replaced with `/` after the redirect so repeated back
    /// presses converge on the loading screen.
    pub fn on_popstate<B: StorageBackend>(&self, store: &SessionStore<B>) -> Vec<NavEffect> {
        store.clear_all(self.cleared_on_exit);
        log::debug!("popstate on {}; redirecting to {}", self.own, self.redirect);
        vec![NavEffect::Navigate(self.redirect), NavEffect::ReplaceHistory(AppRoute::Root)]
    }

    /// Best-effort cleanup on `beforeunload`. Safe to call repeatedly.
    pub fn on_unload<B: StorageBackend>(&self, store: &SessionStore<B>) {
        apply_unload(store);
    }
}

/// Page unload: every session key, the loading permit included.
fn apply_unload<B: StorageBackend>(store: &SessionStore<B>) {
    if let Err(e) = store.apply(SessionEvent::Unload) {
        log::warn!("unload cleanup failed: {e}");
    }
}

/// Explicit "back" action of the developer views: drop the whole durable
/// session and return to the loading screen.
pub fn leave_to_root<B: StorageBackend>(store: &SessionStore<B>) -> Vec<NavEffect> {
    store.clear_all(&SessionKey::DURABLE);
    vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]
}

/// App-root lock, active on every route.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellLock;

impl ShellLock {
    /// Routes where back navigation always returns to the loading screen.
    pub const RESTRICTED: [AppRoute; 2] = [AppRoute::Root, AppRoute::Profiles];

    /// App start: no session survives into a new app instance.
    pub fn on_start<B: StorageBackend>(store: &SessionStore<B>) {
        store.reset();
    }

    /// Back/forward anywhere in the app. `leaving` is the route that was
    /// showing before the move, not the destination the browser already
    /// points at. Passes through when a profile is set and `leaving` is not
    /// restricted.
    pub fn on_popstate<B: StorageBackend>(leaving: AppRoute, store: &SessionStore<B>) -> Vec<NavEffect> {
        if Self::RESTRICTED.contains(&leaving) || !store.is_set(SessionKey::SelectedProfile) {
            log::debug!("shell popstate leaving {leaving}; redirecting to /");
            vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]
        } else {
            Vec::new()
        }
    }

    pub fn on_unload<B: StorageBackend>(store: &SessionStore<B>) {
        apply_unload(store);
    }

    /// Page load: the app cannot be deep-linked into.
    pub fn on_load() -> Vec<NavEffect> {
        vec![NavEffect::Navigate(AppRoute::Root)]
    }
}

/// Last route the router rendered.
///
/// `popstate` fires after the browser location has moved to the destination
/// entry, so the route being left has to be remembered from router updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTracker {
    shown: AppRoute,
}

impl RouteTracker {
    pub fn new(initial: AppRoute) -> Self {
        Self { shown: initial }
    }

    /// Record a route the router has settled on.
    pub fn visit(&mut self, route: AppRoute) {
        self.shown = route;
    }

    /// Route being left by the current history move.
    pub fn leaving(self) -> AppRoute {
        self.shown
    }
}
