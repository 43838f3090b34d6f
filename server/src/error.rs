//! Error types for configuration and upstream API access.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are mapped to HTTP status codes once, here, so every
//! `/api` handler answers with the same `{ success: false, error }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Errors produced while reading configuration from the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set (or is blank).
    #[error("missing env var {var}")]
    Missing { var: &'static str },

    /// An environment variable is set but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Errors produced by the Mailchimp and Contentful clients.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// A campaign id that cannot name a Mailchimp campaign.
    #[error("invalid campaign id")]
    InvalidId,

    /// The upstream has no credentials configured.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The HTTP request to the upstream failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success HTTP status.
    #[error("upstream responded with status {status}")]
    Status { status: u16, body: String },

    /// The upstream response body could not be deserialized.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl UpstreamError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidId | Self::Status { status: 404, .. } => StatusCode::NOT_FOUND,
            Self::Request(_) | Self::Status { .. } | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "upstream call failed");
        }
        let body = serde_json::json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
