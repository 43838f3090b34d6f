//! Contentful Delivery API client and the story catalog seam.
//!
//! Story entries link their background image and video as assets; the
//! linked assets arrive in the same response under `includes.Asset` and
//! are resolved here so the site receives plain URLs.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ContentfulConfig, UpstreamTimeouts};
use crate::error::UpstreamError;

/// Contentful's per-request entry limit.
const ENTRY_LIMIT: &str = "1000";

/// Testimonial record served to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    pub id: String,
    pub name: Option<String>,
    pub position_job: Option<String>,
    pub background_image: Option<String>,
    pub video: Option<String>,
    pub video_link: Option<String>,
}

/// Read access to testimonial stories.
#[async_trait::async_trait]
pub trait StoryCatalog: Send + Sync {
    /// All published stories, in entry order.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the upstream call fails.
    async fn stories(&self) -> Result<Vec<StoryRecord>, UpstreamError>;
}

pub struct ContentfulClient {
    http: reqwest::Client,
    entries_url: String,
    access_token: String,
    content_type: String,
}

impl ContentfulClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ContentfulConfig, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            entries_url: config.entries_url(),
            access_token: config.access_token,
            content_type: config.story_content_type,
        })
    }
}

#[async_trait::async_trait]
impl StoryCatalog for ContentfulClient {
    async fn stories(&self) -> Result<Vec<StoryRecord>, UpstreamError> {
        let response = self
            .http
            .get(&self.entries_url)
            .bearer_auth(&self.access_token)
            .query(&[("content_type", self.content_type.as_str()), ("include", "1"), ("limit", ENTRY_LIMIT)])
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }

        let stories = parse_entries(&text)?;
        tracing::debug!(count = stories.len(), "stories fetched");
        Ok(stories)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct EntriesWire {
    #[serde(default)]
    items: Vec<EntryWire>,
    #[serde(default)]
    includes: IncludesWire,
}

#[derive(Deserialize, Default)]
struct IncludesWire {
    #[serde(default, rename = "Asset")]
    assets: Vec<AssetWire>,
}

#[derive(Deserialize)]
struct SysWire {
    id: String,
}

#[derive(Deserialize)]
struct EntryWire {
    sys: SysWire,
    #[serde(default)]
    fields: StoryFieldsWire,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct StoryFieldsWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    position_job: Option<String>,
    #[serde(default)]
    background_image: Option<LinkWire>,
    #[serde(default)]
    video: Option<LinkWire>,
    #[serde(default)]
    video_link: Option<String>,
}

#[derive(Deserialize)]
struct LinkWire {
    sys: SysWire,
}

#[derive(Deserialize)]
struct AssetWire {
    sys: SysWire,
    #[serde(default)]
    fields: AssetFieldsWire,
}

#[derive(Deserialize, Default)]
struct AssetFieldsWire {
    #[serde(default)]
    file: Option<AssetFileWire>,
}

#[derive(Deserialize)]
struct AssetFileWire {
    url: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Asset URLs come back protocol-relative (`//images.ctfassets.net/...`).
fn absolute_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

fn parse_entries(json: &str) -> Result<Vec<StoryRecord>, UpstreamError> {
    let wire: EntriesWire = serde_json::from_str(json).map_err(|e| UpstreamError::Parse(e.to_string()))?;

    let assets: HashMap<String, String> = wire
        .includes
        .assets
        .into_iter()
        .filter_map(|asset| {
            let file = asset.fields.file?;
            Some((asset.sys.id, absolute_asset_url(&file.url)))
        })
        .collect();
    let resolve = |link: Option<LinkWire>| link.and_then(|l| assets.get(&l.sys.id).cloned());

    Ok(wire
        .items
        .into_iter()
        .map(|entry| StoryRecord {
            id: entry.sys.id,
            name: entry.fields.name,
            position_job: entry.fields.position_job,
            background_image: resolve(entry.fields.background_image),
            video: resolve(entry.fields.video),
            video_link: entry.fields.video_link,
        })
        .collect())
}

#[cfg(test)]
#[path = "contentful_test.rs"]
mod tests;
