#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::UpstreamTimeouts;
use services::contentful::{ContentfulClient, StoryCatalog};
use services::mailchimp::{CampaignArchive, MailchimpClient};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = config::port_from_env().expect("invalid PORT");
    let timeouts = UpstreamTimeouts::from_env();

    let state = state::AppState::new(campaign_archive(timeouts), story_catalog(timeouts));
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "realty-site listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Mailchimp client, or `None` (campaign routes answer 503) if unconfigured.
fn campaign_archive(timeouts: UpstreamTimeouts) -> Option<Arc<dyn CampaignArchive>> {
    let config = match config::MailchimpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "mailchimp not configured; campaign routes disabled");
            return None;
        }
    };
    let prefix = config.server_prefix.clone();
    match MailchimpClient::new(config, timeouts) {
        Ok(client) => {
            tracing::info!(%prefix, "mailchimp client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "mailchimp client init failed; campaign routes disabled");
            None
        }
    }
}

/// Contentful client, or `None` (stories route answers 503) if unconfigured.
fn story_catalog(timeouts: UpstreamTimeouts) -> Option<Arc<dyn StoryCatalog>> {
    let config = match config::ContentfulConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "contentful not configured; stories route disabled");
            return None;
        }
    };
    let space = config.space_id.clone();
    match ContentfulClient::new(config, timeouts) {
        Ok(client) => {
            tracing::info!(%space, "contentful client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "contentful client init failed; stories route disabled");
            None
        }
    }
}
