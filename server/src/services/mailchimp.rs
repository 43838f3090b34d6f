//! Mailchimp Marketing API client and the campaign archive seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to Mailchimp: the API key stays on the server and
//! `/api/mailchimp/*` routes call through [`CampaignArchive`]. The production
//! implementation is [`MailchimpClient`]; route tests use in-memory fakes.
//!
//! DESIGN
//! ======
//! Campaign summaries are enriched with images and paragraphs extracted from
//! each campaign's HTML. Sent campaigns never change, so extractions are
//! cached by campaign id for the life of the process.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::html_extract::{Extracted, ExtractedImage, HtmlExtractor};
use crate::config::{MailchimpConfig, UpstreamTimeouts};
use crate::error::UpstreamError;

/// Marketing API upper bound for `count`.
pub const MAX_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_PAGE_SIZE: u32 = 6;
/// Concurrent `/content` requests while enriching a page.
const CONTENT_FETCH_CONCURRENCY: usize = 8;
/// Campaigns per list call that may trigger a `/content` fetch: one blog page.
/// Later campaigns are enriched from the cache only.
pub const ENRICHED_PER_LIST: usize = 21;
/// Mailchimp campaign ids are 10 hex characters; anything longer is not one.
const MAX_CAMPAIGN_ID_LEN: usize = 64;

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// Query accepted by `GET /api/mailchimp/campaigns`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignListQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl Default for CampaignListQuery {
    fn default() -> Self {
        Self { status: Some("sent".into()), count: Some(DEFAULT_PAGE_SIZE), offset: Some(0) }
    }
}

impl CampaignListQuery {
    /// Fill omitted fields with the site defaults.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        let defaults = Self::default();
        Self {
            status: self.status.or(defaults.status),
            count: self.count.or(defaults.count),
            offset: self.offset.or(defaults.offset),
        }
    }

    /// Query pairs for the upstream call, newest first.
    #[must_use]
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("count", self.count.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE).to_string()),
            ("offset", self.offset.unwrap_or(0).to_string()),
            ("sort_field", "send_time".to_owned()),
            ("sort_dir", "DESC".to_owned()),
        ];
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_owned()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSettings {
    #[serde(default)]
    pub subject_line: Option<String>,
    #[serde(default)]
    pub preview_text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
}

/// Campaign as served to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub id: String,
    pub settings: CampaignSettings,
    pub send_time: Option<String>,
    pub archive_url: Option<String>,
    pub long_archive_url: Option<String>,
    pub images: Vec<ExtractedImage>,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignList {
    pub campaigns: Vec<CampaignSummary>,
    pub total_items: u64,
}

/// Summary plus body, for the campaign page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub summary: CampaignSummary,
    pub html: Option<String>,
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CampaignReport {
    pub opens: u64,
    pub clicks: u64,
    pub open_rate: f64,
    pub click_rate: f64,
    pub emails_sent: u64,
}

/// Accept only alphanumeric ids, so an id can never change the upstream path.
///
/// # Errors
///
/// Returns [`UpstreamError::InvalidId`] for anything else.
pub fn validate_campaign_id(campaign_id: &str) -> Result<&str, UpstreamError> {
    let valid = !campaign_id.is_empty()
        && campaign_id.len() <= MAX_CAMPAIGN_ID_LEN
        && campaign_id.bytes().all(|b| b.is_ascii_alphanumeric());
    if valid { Ok(campaign_id) } else { Err(UpstreamError::InvalidId) }
}

fn campaign_path(prefix: &str, campaign_id: &str, suffix: &str) -> Result<String, UpstreamError> {
    let id = validate_campaign_id(campaign_id)?;
    Ok(format!("{prefix}/{id}{suffix}"))
}

// =============================================================================
// SEAM
// =============================================================================

/// Read access to the newsletter archive.
#[async_trait::async_trait]
pub trait CampaignArchive: Send + Sync {
    /// One page of campaigns, enriched with extracted images and text.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the upstream call fails.
    async fn list(&self, query: &CampaignListQuery) -> Result<CampaignList, UpstreamError>;

    /// One campaign with its HTML and plain-text body.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the upstream call fails.
    async fn detail(&self, campaign_id: &str) -> Result<CampaignDetail, UpstreamError>;

    /// Engagement report for one campaign.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the upstream call fails.
    async fn report(&self, campaign_id: &str) -> Result<CampaignReport, UpstreamError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct MailchimpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    extractor: HtmlExtractor,
    extracted: RwLock<HashMap<String, Extracted>>,
}

impl MailchimpClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: MailchimpConfig, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        let extractor = HtmlExtractor::new().map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            api_key: config.api_key,
            extractor,
            extracted: RwLock::new(HashMap::new()),
        })
    }

    async fn get_text(&self, path: &str, params: &[(&str, String)]) -> Result<String, UpstreamError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .basic_auth("anystring", Some(&self.api_key))
            .query(params)
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
        Ok(text)
    }

    async fn content(&self, campaign_id: &str) -> Result<ContentWire, UpstreamError> {
        let text = self.get_text(&campaign_path("/campaigns", campaign_id, "/content")?, &[]).await?;
        parse_content(&text)
    }

    /// Extraction for `campaign_id`, from cache or by fetching its content.
    /// Failures degrade to an empty extraction.
    async fn extraction(&self, campaign_id: &str) -> Extracted {
        if let Some(hit) = self.extracted.read().await.get(campaign_id) {
            return hit.clone();
        }
        match self.content(campaign_id).await {
            Ok(content) => {
                let extracted = self.extractor.extract(content.html.as_deref().unwrap_or_default());
                self.extracted.write().await.insert(campaign_id.to_owned(), extracted.clone());
                extracted
            }
            Err(e) => {
                tracing::warn!(campaign_id, error = %e, "campaign content unavailable for extraction");
                Extracted::default()
            }
        }
    }

    async fn cached_extraction(&self, campaign_id: &str) -> Extracted {
        self.extracted.read().await.get(campaign_id).cloned().unwrap_or_default()
    }
}

/// Summaries for one list response. `lookup(id, may_fetch)` resolves the
/// extraction; only the first [`ENRICHED_PER_LIST`] campaigns may fetch.
async fn enrich_page<F, Fut>(campaigns: Vec<CampaignWire>, lookup: F) -> Vec<CampaignSummary>
where
    F: Fn(String, bool) -> Fut,
    Fut: Future<Output = Extracted>,
{
    let lookup = &lookup;
    stream::iter(campaigns.into_iter().enumerate())
        .map(|(index, wire)| async move {
            let extracted = lookup(wire.id.clone(), index < ENRICHED_PER_LIST).await;
            wire.into_summary(extracted)
        })
        .buffered(CONTENT_FETCH_CONCURRENCY)
        .collect()
        .await
}

#[async_trait::async_trait]
impl CampaignArchive for MailchimpClient {
    async fn list(&self, query: &CampaignListQuery) -> Result<CampaignList, UpstreamError> {
        let text = self.get_text("/campaigns", &query.upstream_params()).await?;
        let page = parse_campaign_page(&text)?;
        let total_items = page.total_items;

        let campaigns = enrich_page(page.campaigns, move |campaign_id, may_fetch| async move {
            if may_fetch {
                self.extraction(&campaign_id).await
            } else {
                self.cached_extraction(&campaign_id).await
            }
        })
        .await;

        tracing::debug!(count = campaigns.len(), total_items, "campaign page fetched");
        Ok(CampaignList { campaigns, total_items })
    }

    async fn detail(&self, campaign_id: &str) -> Result<CampaignDetail, UpstreamError> {
        let (campaign, content) = futures::try_join!(
            async {
                let text = self.get_text(&campaign_path("/campaigns", campaign_id, "")?, &[]).await?;
                parse_campaign(&text)
            },
            self.content(campaign_id),
        )?;
        let extracted = self.extractor.extract(content.html.as_deref().unwrap_or_default());
        self.extracted.write().await.insert(campaign_id.to_owned(), extracted.clone());
        Ok(CampaignDetail {
            summary: campaign.into_summary(extracted),
            html: content.html,
            plain_text: content.plain_text,
        })
    }

    async fn report(&self, campaign_id: &str) -> Result<CampaignReport, UpstreamError> {
        let text = self.get_text(&campaign_path("/reports", campaign_id, "")?, &[]).await?;
        parse_report(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct CampaignPageWire {
    #[serde(default)]
    campaigns: Vec<CampaignWire>,
    #[serde(default)]
    total_items: u64,
}

#[derive(Deserialize)]
struct CampaignWire {
    id: String,
    #[serde(default)]
    settings: CampaignSettings,
    #[serde(default)]
    send_time: Option<String>,
    #[serde(default)]
    archive_url: Option<String>,
    #[serde(default)]
    long_archive_url: Option<String>,
}

impl CampaignWire {
    fn into_summary(self, extracted: Extracted) -> CampaignSummary {
        CampaignSummary {
            id: self.id,
            settings: self.settings,
            // Unsent campaigns report an empty send_time.
            send_time: self.send_time.filter(|t| !t.is_empty()),
            archive_url: self.archive_url,
            long_archive_url: self.long_archive_url,
            images: extracted.images,
            descriptions: extracted.descriptions,
        }
    }
}

#[derive(Deserialize)]
struct ContentWire {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    plain_text: Option<String>,
}

#[derive(Deserialize, Default)]
struct ReportWire {
    #[serde(default)]
    emails_sent: u64,
    #[serde(default)]
    opens: OpensWire,
    #[serde(default)]
    clicks: ClicksWire,
}

#[derive(Deserialize, Default)]
struct OpensWire {
    #[serde(default)]
    opens_total: u64,
    #[serde(default)]
    open_rate: f64,
}

#[derive(Deserialize, Default)]
struct ClicksWire {
    #[serde(default)]
    clicks_total: u64,
    #[serde(default)]
    click_rate: f64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_campaign_page(json: &str) -> Result<CampaignPageWire, UpstreamError> {
    serde_json::from_str(json).map_err(|e| UpstreamError::Parse(e.to_string()))
}

fn parse_campaign(json: &str) -> Result<CampaignWire, UpstreamError> {
    serde_json::from_str(json).map_err(|e| UpstreamError::Parse(e.to_string()))
}

fn parse_content(json: &str) -> Result<ContentWire, UpstreamError> {
    let content: ContentWire = serde_json::from_str(json).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    Ok(ContentWire {
        html: content.html.filter(|h| !h.trim().is_empty()),
        plain_text: content.plain_text.filter(|t| !t.trim().is_empty()),
    })
}

fn parse_report(json: &str) -> Result<CampaignReport, UpstreamError> {
    let wire: ReportWire = serde_json::from_str(json).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    Ok(CampaignReport {
        opens: wire.opens.opens_total,
        clicks: wire.clicks.clicks_total,
        open_rate: wire.opens.open_rate,
        click_rate: wire.clicks.click_rate,
        emails_sent: wire.emails_sent,
    })
}

#[cfg(test)]
#[path = "mailchimp_test.rs"]
mod tests;
