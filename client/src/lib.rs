//! # client
//!
//! Leptos + WASM frontend for the portfolio site: a loading screen, profile
//! selection, the recruiter landing page, and a developer area with a token
//! gated source viewer.
//!
//! Navigation is gated twice. `util::guard` runs before the router activates
//! a protected route; `util::history_lock` handles back/forward and reload,
//! which never pass through the router's guard. Both read the same
//! `state::store::SessionStore`, which is UX gating only and grants no access
//! to anything the backend does not check itself.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
