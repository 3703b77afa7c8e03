//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders and ships the front-end: Leptos SSR for every
//! page route, the compiled WASM bundle under `/pkg`, and a health probe.
//! All portfolio data is fetched by the browser from the external REST API.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Routes that do not depend on the Leptos build.
pub fn base_routes() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new().route("/healthz", get(health::healthz)).layer(cors)
}

/// Full site: SSR pages, static bundle and base routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app() -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(folio_client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || folio_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
