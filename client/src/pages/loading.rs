//! Loading screen at `/`: resets the session, then hands off to profile
//! selection after a fixed delay.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::session::SessionEvent;
use crate::state::store::{SessionStore, StorageBackend};
use crate::util::browser::{AppStore, install_history_lock};
use crate::util::history_lock::{HistoryLock, NavEffect};
use crate::util::route::AppRoute;

/// Entry: drop every session key, including a permit left by an earlier
/// pass, so `/profiles` stays closed until the delay elapses.
pub fn enter<B: StorageBackend>(store: &SessionStore<B>) {
    store.reset();
}

/// Delay elapsed: grant the one-shot permit and move to profile selection.
pub fn finish<B: StorageBackend>(store: &SessionStore<B>) -> Vec<NavEffect> {
    if let Err(e) = store.apply(SessionEvent::EnterFromLoading) {
        log::warn!("loading permit not granted: {e}");
        return Vec::new();
    }
    vec![NavEffect::Navigate(AppRoute::Profiles)]
}

/// Loading page. Cannot be deep-linked past: any entry lands here first.
#[component]
pub fn LoadingPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    enter(&store);
    install_history_lock(&HistoryLock::LOADING, store.clone(), navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let delay = config.loading_delay;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            let effects = finish(&store);
            crate::util::browser::apply_effects(&effects, &navigate);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, navigate);
    }

    view! {
        <div class="loading-screen">
            <h1 class="loading-screen__title">"Portfolio"</h1>
            <div class="loading-screen__bar"></div>
        </div>
    }
}
