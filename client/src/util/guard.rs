//! Navigation guard for router-mediated route activation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router consults [`can_enter`] before activating any guarded route
//! (typed URL, programmatic navigate, in-app link). Raw back/forward never
//! reaches the router guard; that path is covered by the history locks in
//! [`crate::util::history_lock`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::store::{SessionKey, SessionStore, StorageBackend};
use crate::util::route::AppRoute;

/// Route to send denied navigations to.
pub const DENIED_REDIRECT: AppRoute = AppRoute::Root;

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `target` may activate.
///
/// Profile selection is open while the loading permit is set. Every guarded
/// route is open once any profile value is stored, even one that does not
/// match the route; the page's own entry check is the second line. The
/// original destination is not remembered on denial.
pub fn can_enter<B: StorageBackend>(target: AppRoute, store: &SessionStore<B>) -> GuardDecision {
    if !target.is_guarded() {
        return GuardDecision::Allow;
    }
    if target == AppRoute::Profiles && store.from_loading_screen() {
        return GuardDecision::Allow;
    }
    if store.is_set(SessionKey::SelectedProfile) {
        return GuardDecision::Allow;
    }
    log::debug!("guard denied {target}; redirecting to {DENIED_REDIRECT}");
    GuardDecision::Redirect(DENIED_REDIRECT)
}
