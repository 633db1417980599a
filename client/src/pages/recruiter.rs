//! Recruiter landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! No view-level history lock: back navigation here is decided by the shell
//! lock alone, which lets it proceed while a profile is selected. The page's
//! own back button still drops the session and returns to `/`.

#[cfg(test)]
#[path = "recruiter_test.rs"]
mod recruiter_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::portfolio::RecruiterData;
use crate::state::session::Profile;
use crate::state::store::{SessionKey, SessionStore, StorageBackend};
use crate::util::browser::{AppStore, apply_effects};
use crate::util::history_lock::leave_to_root;
use crate::util::route::AppRoute;

/// Entry check. On success marks portfolio access; the flag is recorded but
/// nothing gates on it.
///
/// # Errors
///
/// Returns the redirect target when the recruiter profile is not selected.
pub fn enter<B: StorageBackend>(store: &SessionStore<B>) -> Result<(), AppRoute> {
    if store.selected_profile() != Some(Profile::Recruiter) {
        return Err(AppRoute::Root);
    }
    store.set_flag(SessionKey::PortfolioAccess);
    Ok(())
}

#[component]
pub fn RecruiterPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let data = RwSignal::new(RecruiterData::default());

    if let Err(redirect) = enter(&store) {
        Effect::new(move || navigate(redirect.path(), NavigateOptions::default()));
        return ().into_any();
    }
    load_data(config, data);

    let on_back = move |_| apply_effects(&leave_to_root(&store), &navigate);

    let experience = move || {
        data.get()
            .experience
            .into_iter()
            .map(|item| {
                view! {
                    <li class="experience-item">
                        <h3>{item.title}" · "{item.company}</h3>
                        <span class="experience-item__period">{item.period}</span>
                        <p>{item.description}</p>
                    </li>
                }
            })
            .collect_view()
    };

    let projects = move || {
        data.get()
            .projects
            .into_iter()
            .map(|item| {
                view! {
                    <li class="project-card">
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                        <p class="project-card__tech">{item.technologies.join(", ")}</p>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="recruiter-page">
            <header class="recruiter-page__header">
                <button class="btn" on:click=on_back>
                    "Switch profile"
                </button>
            </header>
            <Show
                when=move || !data.get().loading
                fallback=|| view! { <div class="recruiter-page__loading">"Loading..."</div> }
            >
                {move || {
                    data.get()
                        .profile
                        .map(|profile| {
                            view! {
                                <section class="recruiter-hero">
                                    <h1>{profile.name}</h1>
                                    <h2>{profile.title}</h2>
                                    <p>{profile.about}</p>
                                </section>
                            }
                        })
                }}
            </Show>
            <section class="recruiter-page__experience">
                <h2>"Experience"</h2>
                <ul>{experience}</ul>
            </section>
            <section class="recruiter-page__projects">
                <h2>"Projects"</h2>
                <ul>{projects}</ul>
            </section>
        </div>
    }
    .into_any()
}

fn load_data(config: ClientConfig, data: RwSignal<RecruiterData>) {
    #[cfg(feature = "hydrate")]
    {
        let profile_config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_profile(&profile_config).await;
            data.update(|d| d.profile_loaded(result));
        });
        let experience_config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_experience(&experience_config).await;
            data.update(|d| d.experience_loaded(result));
        });
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects(&config).await;
            data.update(|d| d.projects_loaded(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, data);
    }
}
