//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::ClientConfig;
use crate::pages::{
    code_viewer::CodeViewerPage, developer_login::DeveloperLoginPage, loading::LoadingPage,
    profiles::ProfilesPage, recruiter::RecruiterPage,
};
use crate::util::browser::{AppStore, install_shell_lock};
use crate::util::guard::{DENIED_REDIRECT, can_enter};
use crate::util::route::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and client config, then sets up routing with
/// the navigation guard on every route except `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppStore::default();
    provide_context(store.clone());
    provide_context(ClientConfig::from_build_env());

    let guard = move |route: AppRoute| {
        let store = store.clone();
        move || Some(can_enter(route, &store).is_allowed())
    };
    let denied = || DENIED_REDIRECT.path();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <SessionShell/>
            <Routes fallback=|| view! { <Redirect path=AppRoute::Root.path()/> }>
                <Route path=StaticSegment("") view=LoadingPage/>
                <ProtectedRoute
                    path=StaticSegment("profiles")
                    condition=guard(AppRoute::Profiles)
                    redirect_path=denied
                    view=ProfilesPage
                />
                <ProtectedRoute
                    path=StaticSegment("recruiter")
                    condition=guard(AppRoute::Recruiter)
                    redirect_path=denied
                    view=RecruiterPage
                />
                <ProtectedRoute
                    path=(StaticSegment("developer"), StaticSegment("login"))
                    condition=guard(AppRoute::DeveloperLogin)
                    redirect_path=denied
                    view=DeveloperLoginPage
                />
                <ProtectedRoute
                    path=(StaticSegment("developer"), StaticSegment("code"))
                    condition=guard(AppRoute::DeveloperCode)
                    redirect_path=denied
                    view=CodeViewerPage
                />
            </Routes>
        </Router>
    }
}

/// App-wide popstate/unload handling. Lives inside the router so it can
/// navigate; renders nothing.
#[component]
fn SessionShell() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_shell_lock(store, use_navigate());
}
