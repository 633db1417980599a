//! Browser adapters for session storage, history, and window events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here touches `web-sys` and is only live in the `hydrate` build.
//! SSR and host test builds get an in-memory store and no-op effects, so the
//! pure lock and guard logic stays testable without a browser.

use leptos_router::NavigateOptions;

use crate::state::store::SessionStore;
#[cfg(feature = "hydrate")]
use crate::state::store::{StorageBackend, StorageScope};
#[cfg(feature = "hydrate")]
use crate::util::history_lock::{RouteTracker, ShellLock};
use crate::util::history_lock::{HistoryLock, NavEffect, Navigation, run_effects};
use crate::util::route::AppRoute;

/// `localStorage` / `sessionStorage` backend.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage(scope: StorageScope) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match scope {
            StorageScope::Durable => window.local_storage(),
            StorageScope::OneShot => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn read(&self, scope: StorageScope, key: &str) -> Option<String> {
        Self::storage(scope)?.get_item(key).ok().flatten()
    }

    fn write(&self, scope: StorageScope, key: &str, value: &str) {
        if let Some(storage) = Self::storage(scope) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        if let Some(storage) = Self::storage(scope) {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(feature = "hydrate")]
pub type PlatformStorage = BrowserStorage;
#[cfg(not(feature = "hydrate"))]
pub type PlatformStorage = crate::state::store::MemoryStorage;

/// Session store type provided through context.
pub type AppStore = SessionStore<PlatformStorage>;

/// Overwrite the current history entry with `route`.
pub fn replace_history(route: AppRoute) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = route;
    }
}

/// Route of the current browser location. `Root` outside the browser.
pub fn current_route() -> AppRoute {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map_or(AppRoute::Root, |path| AppRoute::from_path(&path))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AppRoute::Root
    }
}

/// [`Navigation`] over the Leptos router's navigate function.
pub struct RouterNavigation<F>(pub F);

impl<F> Navigation for RouterNavigation<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&mut self, route: AppRoute) {
        (self.0)(route.path(), NavigateOptions::default());
    }

    fn replace_history(&mut self, route: AppRoute) {
        replace_history(route);
    }
}

/// Apply lock effects through the router.
pub fn apply_effects<F>(effects: &[NavEffect], navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    run_effects(effects, &mut RouterNavigation(navigate));
}

/// Install a view's history lock for the lifetime of the calling component.
///
/// The entry rewrite runs before this returns, so callers install the lock
/// before issuing any request.
pub fn install_history_lock<F>(lock: &'static HistoryLock, store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    run_effects(&lock.on_enter(), &mut RouterNavigation(&navigate));

    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let popstate_store = store.clone();
        let popstate = window_event_listener(leptos::ev::popstate, move |_| {
            let effects = lock.on_popstate(&popstate_store);
            apply_effects(&effects, &navigate);
        });
        let unload = window_event_listener(leptos::ev::beforeunload, move |_| lock.on_unload(&store));
        on_cleanup(move || {
            popstate.remove();
            unload.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, navigate);
    }
}

/// Install the app-root lock. Clears the session and sends the page to the
/// loading screen, then watches popstate and unload for the whole app.
///
/// Must be called inside the `<Router>`.
pub fn install_shell_lock<F>(store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        ShellLock::on_start(&store);
        apply_effects(&ShellLock::on_load(), &navigate);

        // Effects run after the popstate dispatch, so the tracker still holds
        // the route being left when the handler below reads it.
        let tracker = StoredValue::new(RouteTracker::new(current_route()));
        let location = leptos_router::hooks::use_location();
        Effect::new(move || {
            let route = AppRoute::from_path(&location.pathname.get());
            tracker.update_value(|t| t.visit(route));
        });

        let popstate_store = store.clone();
        let popstate = window_event_listener(leptos::ev::popstate, move |_| {
            let leaving = tracker.get_value().leaving();
            let effects = ShellLock::on_popstate(leaving, &popstate_store);
            apply_effects(&effects, &navigate);
        });
        let unload = window_event_listener(leptos::ev::beforeunload, move |_| ShellLock::on_unload(&store));
        on_cleanup(move || {
            popstate.remove();
            unload.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, navigate);
    }
}
