//! Developer login: exchanges credentials for the code-viewer token.

#[cfg(test)]
#[path = "developer_login_test.rs"]
mod developer_login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::net::types::{Credentials, LoginResponse};
use crate::state::session::{AuthToken, Profile, SessionEvent};
use crate::state::store::{SessionStore, StorageBackend};
use crate::util::browser::{AppStore, apply_effects, install_history_lock};
use crate::util::history_lock::{HistoryLock, NavEffect, leave_to_root};
use crate::util::route::AppRoute;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both username and password";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Entry check, independent of the router guard.
///
/// # Errors
///
/// Returns the redirect target when the developer profile is not selected.
pub fn enter<B: StorageBackend>(store: &SessionStore<B>) -> Result<(), AppRoute> {
    if store.selected_profile() == Some(Profile::Developer) { Ok(()) } else { Err(AppRoute::Root) }
}

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error_message: String,
    pub loading: bool,
}

impl LoginForm {
    /// Validate input and mark the form busy. `None` means no request should
    /// be sent; the error message is already set.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.username.is_empty() || self.password.is_empty() {
            self.error_message = MISSING_FIELDS_MESSAGE.to_owned();
            return None;
        }
        self.loading = true;
        self.error_message.clear();
        Some(Credentials { username: self.username.clone(), password: self.password.clone() })
    }

    /// Show the backend's message, or a generic one, and release the form.
    pub fn fail(&mut self, err: &ApiError) {
        self.error_message = err.message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned();
        self.loading = false;
    }
}

/// Handle the login response. On success the token is stored and the form
/// stays busy while the page navigates away.
pub fn complete_login<B: StorageBackend>(
    store: &SessionStore<B>,
    form: &mut LoginForm,
    result: Result<LoginResponse, ApiError>,
) -> Vec<NavEffect> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::debug!("login rejected: {e}");
            form.fail(&e);
            return Vec::new();
        }
    };
    let Some(token) = AuthToken::new(response.token) else {
        form.fail(&ApiError::Decode("empty token".to_owned()));
        return Vec::new();
    };
    match store.apply(SessionEvent::Login(token)) {
        Ok(_) => vec![NavEffect::Navigate(AppRoute::DeveloperCode)],
        Err(e) => {
            log::warn!("login dropped: {e}");
            form.fail(&ApiError::Unavailable);
            Vec::new()
        }
    }
}

#[component]
pub fn DeveloperLoginPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());

    if let Err(redirect) = enter(&store) {
        Effect::new(move || navigate(redirect.path(), NavigateOptions::default()));
        return ().into_any();
    }
    install_history_lock(&HistoryLock::DEVELOPER_LOGIN, store.clone(), navigate.clone());

    let submit_store = store.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        if next.loading {
            return;
        }
        let credentials = next.begin_submit();
        form.set(next);
        let Some(credentials) = credentials else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let store = submit_store.clone();
            let navigate = submit_navigate.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&config, &credentials).await;
                let mut next = form.get_untracked();
                let effects = complete_login(&store, &mut next, result);
                form.set(next);
                apply_effects(&effects, &navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submit_store, &submit_navigate, &config, credentials);
        }
    };

    let on_back = move |_| {
        let effects = leave_to_root(&store);
        apply_effects(&effects, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Developer Access"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || form.get().loading>
                        {move || if form.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !form.get().error_message.is_empty()>
                    <p class="login-message">{move || form.get().error_message}</p>
                </Show>
                <button class="login-back" on:click=on_back>
                    "Back"
                </button>
            </div>
        </div>
    }
    .into_any()
}
