//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Each upstream is optional: a missing credential leaves its slot `None`
//! and the matching routes answer `503` while the rest of the site works.

use std::sync::Arc;

use crate::error::UpstreamError;
use crate::services::contentful::StoryCatalog;
use crate::services::mailchimp::CampaignArchive;

/// Clone is required by Axum; every field is an `Arc`.
#[derive(Clone, Default)]
pub struct AppState {
    pub campaigns: Option<Arc<dyn CampaignArchive>>,
    pub stories: Option<Arc<dyn StoryCatalog>>,
}

impl AppState {
    #[must_use]
    pub fn new(campaigns: Option<Arc<dyn CampaignArchive>>, stories: Option<Arc<dyn StoryCatalog>>) -> Self {
        Self { campaigns, stories }
    }

    /// # Errors
    ///
    /// Returns [`UpstreamError::NotConfigured`] when Mailchimp is disabled.
    pub fn campaigns(&self) -> Result<&dyn CampaignArchive, UpstreamError> {
        self.campaigns.as_deref().ok_or(UpstreamError::NotConfigured("Mailchimp"))
    }

    /// # Errors
    ///
    /// Returns [`UpstreamError::NotConfigured`] when Contentful is disabled.
    pub fn stories(&self) -> Result<&dyn StoryCatalog, UpstreamError> {
        self.stories.as_deref().ok_or(UpstreamError::NotConfigured("Contentful"))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
