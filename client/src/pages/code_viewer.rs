//! Code viewer for the authenticated developer profile.

#[cfg(test)]
#[path = "code_viewer_test.rs"]
mod code_viewer_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::net::types::SourceFile;
use crate::state::portfolio::{CodeViewerData, FilesOutcome};
use crate::state::session::{AuthToken, Profile, SessionEvent};
use crate::state::store::{SessionStore, StorageBackend};
use crate::util::browser::{AppStore, apply_effects, install_history_lock};
use crate::util::history_lock::{HistoryLock, NavEffect, leave_to_root};
use crate::util::route::AppRoute;

/// Two-step entry check: no developer profile goes to `/`, a missing token
/// goes to the login page.
///
/// # Errors
///
/// Returns the redirect target for whichever check failed first.
pub fn enter<B: StorageBackend>(store: &SessionStore<B>) -> Result<AuthToken, AppRoute> {
    if store.selected_profile() != Some(Profile::Developer) {
        return Err(AppRoute::Root);
    }
    store.auth_token().ok_or(AppRoute::DeveloperLogin)
}

/// Apply the source-file response. A 401 drops the token and returns to login.
pub fn handle_files<B: StorageBackend>(
    store: &SessionStore<B>,
    data: &mut CodeViewerData,
    result: Result<Vec<SourceFile>, ApiError>,
) -> Vec<NavEffect> {
    match data.files_loaded(result) {
        FilesOutcome::Unauthorized => {
            logout_token(store);
            vec![NavEffect::Navigate(AppRoute::DeveloperLogin)]
        }
        FilesOutcome::Loaded | FilesOutcome::Failed => Vec::new(),
    }
}

/// Logout button: drop the token only, then leave for the loading screen.
pub fn logout<B: StorageBackend>(store: &SessionStore<B>) -> Vec<NavEffect> {
    logout_token(store);
    vec![NavEffect::Navigate(AppRoute::Root)]
}

fn logout_token<B: StorageBackend>(store: &SessionStore<B>) {
    if let Err(e) = store.apply(SessionEvent::Logout) {
        log::warn!("logout failed: {e}");
    }
}

pub fn file_icon(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "csharp" => "🔷",
        "html" => "🌐",
        "css" | "scss" => "🎨",
        "json" => "📋",
        _ => "📄",
    }
}

pub fn language_class(kind: &str) -> String {
    format!("language-{}", kind.to_lowercase())
}

#[component]
pub fn CodeViewerPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let data = RwSignal::new(CodeViewerData::default());

    let token = match enter(&store) {
        Ok(token) => token,
        Err(redirect) => {
            Effect::new(move || navigate(redirect.path(), NavigateOptions::default()));
            return ().into_any();
        }
    };
    // Lock before the fetch so a fast 401 cannot beat the popstate handler.
    install_history_lock(&HistoryLock::CODE_VIEWER, store.clone(), navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_source_files(&config, &token).await;
            let mut next = data.get_untracked();
            let effects = handle_files(&store, &mut next, result);
            data.set(next);
            apply_effects(&effects, &navigate);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
    }

    let logout_store = store.clone();
    let logout_navigate = navigate.clone();
    let on_logout = move |_| apply_effects(&logout(&logout_store), &logout_navigate);
    let on_back = move |_| apply_effects(&leave_to_root(&store), &navigate);

    let file_list = move || {
        let current = data.get();
        current
            .files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let class = if current.selected == Some(index) {
                    "file-list__item file-list__item--active"
                } else {
                    "file-list__item"
                };
                view! {
                    <li
                        class=class
                        on:click=move |_| data.update(|d| d.select(index))
                    >
                        <span class="file-list__icon">{file_icon(&file.kind)}</span>
                        <span class="file-list__name">{file.name.clone()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    let file_body = move || {
        data.get().selected_file().cloned().map(|file| {
            let code_class = language_class(&file.kind);
            view! {
                <div class="code-viewer__file">
                    <div class="code-viewer__path">{file.path}</div>
                    <pre>
                        <code class=code_class>{file.content}</code>
                    </pre>
                </div>
            }
        })
    };

    view! {
        <div class="code-viewer">
            <header class="code-viewer__header">
                <button class="btn" on:click=on_back>
                    "Back"
                </button>
                <span class="code-viewer__title">"Source"</span>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Show
                when=move || !data.get().loading
                fallback=|| view! { <p class="code-viewer__loading">"Loading source files..."</p> }
            >
                <div class="code-viewer__body">
                    <ul class="file-list">{file_list}</ul>
                    {file_body}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
