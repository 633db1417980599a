use super::*;
use crate::state::session::{AuthToken, Profile, SessionEvent};
use crate::state::store::MemoryStorage;
use crate::util::guard::can_enter;

/// Records router location and the history stack.
struct FakeBrowser {
    location: AppRoute,
    history: Vec<AppRoute>,
}

impl FakeBrowser {
    fn at(route: AppRoute) -> Self {
        Self { location: route, history: vec![AppRoute::Root, route] }
    }
}

impl Navigation for FakeBrowser {
    fn navigate(&mut self, route: AppRoute) {
        self.location = route;
        self.history.push(route);
    }

    fn replace_history(&mut self, route: AppRoute) {
        if let Some(top) = self.history.last_mut() {
            *top = route;
        }
    }
}

fn developer_store(with_token: bool) -> SessionStore<MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    store.apply(SessionEvent::ChooseProfile(Profile::Developer)).unwrap();
    if with_token {
        store
            .apply(SessionEvent::Login(AuthToken::new("abc").unwrap()))
            .unwrap();
    }
    store.set_flag(SessionKey::PortfolioAccess);
    store
}

// =============================================================
// Presets
// =============================================================

#[test]
fn locked_views_redirect_to_root() {
    for lock in [HistoryLock::LOADING, HistoryLock::DEVELOPER_LOGIN, HistoryLock::CODE_VIEWER] {
        assert_eq!(lock.redirect, AppRoute::Root);
    }
}

#[test]
fn profiles_and_recruiter_install_no_view_lock() {
    assert!(HistoryLock::for_route(AppRoute::Profiles).is_none());
    assert!(HistoryLock::for_route(AppRoute::Recruiter).is_none());
    assert_eq!(HistoryLock::for_route(AppRoute::DeveloperCode), Some(&HistoryLock::CODE_VIEWER));
}

#[test]
fn on_enter_replaces_current_entry_with_own_path() {
    assert_eq!(
        HistoryLock::DEVELOPER_LOGIN.on_enter(),
        vec![NavEffect::ReplaceHistory(AppRoute::DeveloperLogin)]
    );
    assert_eq!(HistoryLock::LOADING.on_enter(), vec![NavEffect::ReplaceHistory(AppRoute::Root)]);
}

// =============================================================
// popstate
// =============================================================

#[test]
fn popstate_on_code_viewer_clears_session_and_returns_to_root() {
    let store = developer_store(true);
    let mut browser = FakeBrowser::at(AppRoute::DeveloperCode);

    let effects = HistoryLock::CODE_VIEWER.on_popstate(&store);
    run_effects(&effects, &mut browser);

    assert_eq!(browser.location, AppRoute::Root);
    assert_eq!(browser.history.last(), Some(&AppRoute::Root));
    for key in SessionKey::DURABLE {
        assert!(!store.is_set(key), "{key:?}");
    }
    for route in AppRoute::GUARDED {
        assert!(!can_enter(route, &store).is_allowed(), "{route}");
    }
}

#[test]
fn popstate_on_login_keeps_token_key_untouched() {
    let store = developer_store(false);
    store.set(SessionKey::AuthToken, "leftover");

    let effects = HistoryLock::DEVELOPER_LOGIN.on_popstate(&store);

    assert_eq!(effects, vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]);
    assert!(!store.is_set(SessionKey::SelectedProfile));
    assert!(!store.is_set(SessionKey::PortfolioAccess));
    assert!(store.is_set(SessionKey::AuthToken));
    assert!(!can_enter(AppRoute::DeveloperCode, &store).is_allowed());
}

#[test]
fn repeated_popstate_converges_on_root() {
    let store = developer_store(true);
    let mut browser = FakeBrowser::at(AppRoute::DeveloperCode);
    for _ in 0..3 {
        let effects = HistoryLock::CODE_VIEWER.on_popstate(&store);
        run_effects(&effects, &mut browser);
    }
    assert_eq!(browser.location, AppRoute::Root);
    assert_eq!(browser.history.len(), 5);
    assert!(browser.history.iter().skip(2).all(|route| *route == AppRoute::Root));
}

// =============================================================
// unload
// =============================================================

#[test]
fn unload_twice_is_harmless() {
    let store = developer_store(true);
    store.set_flag(SessionKey::FromLoadingScreen);
    HistoryLock::LOADING.on_unload(&store);
    HistoryLock::LOADING.on_unload(&store);
    assert_eq!(store.state(), crate::state::session::SessionState::Unauthenticated);
    assert!(store.backend().is_empty());
}

// =============================================================
// Back action
// =============================================================

#[test]
fn leave_to_root_clears_durable_keys() {
    let store = developer_store(true);
    let effects = leave_to_root(&store);
    assert_eq!(effects, vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]);
    assert!(SessionKey::DURABLE.iter().all(|key| !store.is_set(*key)));
}

// =============================================================
// Shell lock
// =============================================================

#[test]
fn shell_start_clears_every_key() {
    let store = developer_store(true);
    store.set_flag(SessionKey::FromLoadingScreen);
    ShellLock::on_start(&store);
    assert!(store.backend().is_empty());
}

#[test]
fn shell_popstate_redirects_on_restricted_routes() {
    let store = developer_store(false);
    for route in ShellLock::RESTRICTED {
        assert_eq!(
            ShellLock::on_popstate(route, &store),
            vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]
        );
    }
}

#[test]
fn shell_popstate_redirects_without_profile() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(!ShellLock::on_popstate(AppRoute::Recruiter, &store).is_empty());
}

#[test]
fn recruiter_back_navigation_passes_through_while_profile_set() {
    // Recruiter home has no view lock, so the shell decides alone and lets the
    // browser go back; the developer views force a redirect instead.
    let store = SessionStore::new(MemoryStorage::new());
    store.apply(SessionEvent::EnterFromLoading).unwrap();
    let mut tracker = RouteTracker::new(AppRoute::Root);
    tracker.visit(AppRoute::Profiles);
    store.apply(SessionEvent::ChooseProfile(Profile::Recruiter)).unwrap();
    tracker.visit(AppRoute::Recruiter);

    // Back pressed: the browser already shows /profiles, the app is leaving
    // /recruiter.
    let destination = AppRoute::from_path("/profiles");
    assert!(HistoryLock::for_route(AppRoute::Recruiter).is_none());
    assert!(ShellLock::on_popstate(tracker.leaving(), &store).is_empty());
    assert!(store.is_set(SessionKey::SelectedProfile));

    // The router settles on /profiles; going back again from there redirects.
    tracker.visit(destination);
    assert_eq!(
        ShellLock::on_popstate(tracker.leaving(), &store),
        vec![NavEffect::Navigate(AppRoute::Root), NavEffect::ReplaceHistory(AppRoute::Root)]
    );
}

#[test]
fn tracker_reports_route_before_the_move() {
    let mut tracker = RouteTracker::new(AppRoute::Root);
    assert_eq!(tracker.leaving(), AppRoute::Root);
    tracker.visit(AppRoute::DeveloperLogin);
    assert_eq!(tracker.leaving(), AppRoute::DeveloperLogin);
}

#[test]
fn shell_unload_clears_every_key() {
    let store = developer_store(true);
    store.set_flag(SessionKey::FromLoadingScreen);
    ShellLock::on_unload(&store);
    assert!(store.backend().is_empty());
    assert!(!store.from_loading_screen());
}

#[test]
fn shell_and_view_unload_match_unload_event() {
    let via_handlers = developer_store(true);
    via_handlers.set_flag(SessionKey::FromLoadingScreen);
    ShellLock::on_unload(&via_handlers);
    HistoryLock::CODE_VIEWER.on_unload(&via_handlers);

    let via_event = developer_store(true);
    via_event.set_flag(SessionKey::FromLoadingScreen);
    via_event.apply(SessionEvent::Unload).unwrap();

    for key in SessionKey::ALL {
        assert_eq!(via_handlers.is_set(key), via_event.is_set(key), "{key:?}");
    }
    assert_eq!(via_handlers.state(), via_event.state());
}

#[test]
fn shell_load_always_targets_root() {
    assert_eq!(ShellLock::on_load(), vec![NavEffect::Navigate(AppRoute::Root)]);
}
