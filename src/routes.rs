//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR, its compiled bundle under `/pkg`, and a
//! health probe. The portfolio REST API lives on a separate backend and is
//! not routed here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Full application router: Leptos SSR pages, static bundle, health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, RoutesError> {
    let conf = get_configuration(None).map_err(|e| RoutesError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(config, Path::new(&*leptos_options.site_root));
    tracing::debug!(pkg = %pkg.display(), "serving static bundle");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .fallback(redirect_to_root)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Routes that do not depend on the Leptos build.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

fn pkg_dir(config: &ServerConfig, leptos_site_root: &Path) -> PathBuf {
    config
        .site_root
        .clone()
        .unwrap_or_else(|| leptos_site_root.to_path_buf())
        .join("pkg")
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

/// Unknown paths land on the loading screen, like the client-side wildcard.
async fn redirect_to_root() -> Redirect {
    Redirect::temporary("/")
}
