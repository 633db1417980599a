//! Profile selection ("who's watching?").

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Profile, SessionEvent};
use crate::state::store::{SessionStore, StorageBackend};
use crate::util::browser::AppStore;
use crate::util::route::AppRoute;

/// Tiles shown on the selection screen. Stalker and adventurer browse the
/// recruiter view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileChoice {
    Recruiter,
    Developer,
    Stalker,
    Adventurer,
}

impl ProfileChoice {
    pub const ALL: [ProfileChoice; 4] = [Self::Recruiter, Self::Developer, Self::Stalker, Self::Adventurer];

    pub fn profile(self) -> Profile {
        match self {
            Self::Developer => Profile::Developer,
            Self::Recruiter | Self::Stalker | Self::Adventurer => Profile::Recruiter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Recruiter => "Recruiter",
            Self::Developer => "Developer",
            Self::Stalker => "Stalker",
            Self::Adventurer => "Adventurer",
        }
    }

    pub fn destination(self) -> AppRoute {
        match self.profile() {
            Profile::Recruiter => AppRoute::Recruiter,
            Profile::Developer => AppRoute::DeveloperLogin,
        }
    }
}

/// Record the choice, consume the loading permit, and return where to go.
pub fn choose<B: StorageBackend>(store: &SessionStore<B>, choice: ProfileChoice) -> AppRoute {
    if let Err(e) = store.apply(SessionEvent::ChooseProfile(choice.profile())) {
        log::warn!("profile choice rejected: {e}");
    }
    choice.destination()
}

/// Profile selection page. Protected by the router guard only.
#[component]
pub fn ProfilesPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();

    let tiles = ProfileChoice::ALL
        .into_iter()
        .map(|choice| {
            let store = store.clone();
            let navigate = navigate.clone();
            let on_click = move |_| {
                let route = choose(&store, choice);
                navigate(route.path(), NavigateOptions::default());
            };
            view! {
                <button class="profile-tile" on:click=on_click>
                    <span class="profile-tile__label">{choice.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="profiles-page">
            <h1>"Who's watching?"</h1>
            <div class="profiles-page__grid">{tiles}</div>
        </div>
    }
}
