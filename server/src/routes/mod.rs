//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/api` proxy endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. Compiled client assets
//! are served from the site root's `/pkg` directory.

pub mod contentful;
pub mod mailchimp;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API consumed by the hydrated client.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/mailchimp/campaigns", get(mailchimp::list_campaigns))
        .route("/api/mailchimp/campaigns/{id}", get(mailchimp::get_campaign))
        .route("/api/mailchimp/campaigns/{id}/reports", get(mailchimp::get_campaign_report))
        .route("/api/contentful/stories", get(contentful::list_stories))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
