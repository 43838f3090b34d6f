//! REST helpers for the campaign archive and stories endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since data is only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Campaign list/detail calls return `Result<_, String>` with a message that
//! is shown verbatim in the retry banner. Stats and stories never fail from
//! the caller's point of view: stats degrade to zeroes and stories degrade
//! to the built-in fallback set.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::fallback::fallback_stories;
use super::types::{Campaign, CampaignContent, CampaignStats, Story};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{CampaignListWire, CampaignWire, Envelope, StoriesWire};

/// Largest page the campaign archive hands out in one request.
pub const MAX_CAMPAIGN_COUNT: u32 = 1000;

/// Base URL prepended to every API path. Empty means same origin.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("").trim_end_matches('/')
}

/// Filters for the campaign list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignQuery {
    pub status: Option<String>,
    pub count: Option<u32>,
    pub offset: Option<u32>,
}

impl Default for CampaignQuery {
    fn default() -> Self {
        Self { status: Some("sent".to_owned()), count: Some(6), offset: Some(0) }
    }
}

impl CampaignQuery {
    /// Whole sent archive in one page; the blog paginates locally.
    #[must_use]
    pub fn archive() -> Self {
        Self { count: Some(MAX_CAMPAIGN_COUNT), ..Self::default() }
    }
}

/// One page of the campaign list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignPage {
    pub campaigns: Vec<Campaign>,
    pub total_items: u64,
}

#[cfg(any(test, feature = "hydrate"))]
fn campaigns_query_string(query: &CampaignQuery) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("status", status.to_owned()));
    }
    if let Some(count) = query.count {
        pairs.push(("count", count.min(MAX_CAMPAIGN_COUNT).to_string()));
    }
    if let Some(offset) = query.offset {
        pairs.push(("offset", offset.to_string()));
    }
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(any(test, feature = "hydrate"))]
fn campaigns_endpoint(base: &str, query: &CampaignQuery) -> String {
    let qs = campaigns_query_string(query);
    if qs.is_empty() {
        format!("{base}/api/mailchimp/campaigns")
    } else {
        format!("{base}/api/mailchimp/campaigns?{qs}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_endpoint(base: &str, campaign_id: &str) -> String {
    format!("{base}/api/mailchimp/campaigns/{}", urlencoding::encode(campaign_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_reports_endpoint(base: &str, campaign_id: &str) -> String {
    format!("{}/reports", campaign_endpoint(base, campaign_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn stories_endpoint(base: &str) -> String {
    format!("{base}/api/contentful/stories")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Error {status}")
    } else {
        format!("Error {status}: {status_text}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_campaign_page(body: &str) -> Result<CampaignPage, String> {
    let envelope: Envelope<CampaignListWire> = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if !envelope.success {
        return Err("la respuesta de campañas no fue exitosa".to_owned());
    }
    Ok(CampaignPage {
        campaigns: envelope.data.campaigns.into_iter().map(Campaign::from).collect(),
        total_items: envelope.data.total_items,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_campaign_detail(body: &str) -> Result<(Campaign, CampaignContent), String> {
    let envelope: Envelope<CampaignWire> = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if !envelope.success {
        return Err("la campaña no está disponible".to_owned());
    }
    let content = CampaignContent::from_wire(&envelope.data);
    Ok((Campaign::from(envelope.data), content))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_campaign_stats(body: &str) -> Option<CampaignStats> {
    serde_json::from_str::<Envelope<CampaignStats>>(body)
        .ok()
        .map(|envelope| envelope.data)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_stories(body: &str) -> Result<Vec<Story>, String> {
    #[derive(serde::Deserialize)]
    struct StoriesResponse {
        data: StoriesWire,
    }
    let response: StoriesResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(response
        .data
        .stories
        .into_iter()
        .enumerate()
        .map(|(index, wire)| wire.into_story(index))
        .collect())
}

#[cfg(any(test, feature = "hydrate"))]
fn stories_or_fallback(result: Result<Vec<Story>, String>) -> Vec<Story> {
    match result {
        Ok(stories) if !stories.is_empty() => stories,
        Ok(_) => fallback_stories(),
        Err(_e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("stories unavailable, using fallback: {_e}");
            fallback_stories()
        }
    }
}

fn find_story(stories: Vec<Story>, id: &str) -> Result<Story, String> {
    stories
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("Story con ID {id} no encontrada"))
}

#[cfg(feature = "hydrate")]
async fn get_text(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(http_error_message(resp.status(), &resp.status_text()));
    }
    resp.text().await.map_err(|e| e.to_string())
}

/// Fetch a page of campaigns from `/api/mailchimp/campaigns`.
///
/// # Errors
///
/// Returns a display-ready message on network failure, non-2xx status, or
/// an unexpected response shape.
pub async fn fetch_campaigns(query: &CampaignQuery) -> Result<CampaignPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = campaigns_endpoint(api_base(), query);
        let body = get_text(&url).await.inspect_err(|e| log::warn!("campaign list failed: {e}"))?;
        parse_campaign_page(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch a single campaign together with its HTML/plain-text body.
///
/// # Errors
///
/// Same taxonomy as [`fetch_campaigns`].
pub async fn fetch_campaign(campaign_id: &str) -> Result<(Campaign, CampaignContent), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = campaign_endpoint(api_base(), campaign_id);
        let body = get_text(&url)
            .await
            .inspect_err(|e| log::warn!("campaign {campaign_id} failed: {e}"))?;
        parse_campaign_detail(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the engagement report of a campaign. Zeroed on any failure.
pub async fn fetch_campaign_stats(campaign_id: &str) -> CampaignStats {
    #[cfg(feature = "hydrate")]
    {
        let url = campaign_reports_endpoint(api_base(), campaign_id);
        match get_text(&url).await {
            Ok(body) => parse_campaign_stats(&body).unwrap_or_default(),
            Err(e) => {
                log::warn!("campaign {campaign_id} report failed: {e}");
                CampaignStats::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        CampaignStats::default()
    }
}

/// Fetch testimonial stories. Never fails: any error yields the fallback set.
pub async fn get_stories() -> Vec<Story> {
    #[cfg(feature = "hydrate")]
    {
        let result = match get_text(&stories_endpoint(api_base())).await {
            Ok(body) => parse_stories(&body),
            Err(e) => Err(e),
        };
        stories_or_fallback(result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback_stories()
    }
}

/// Look a story up by id.
///
/// # Errors
///
/// Returns `"Story con ID {id} no encontrada"` when no story has that id.
pub async fn get_story_by_id(id: &str) -> Result<Story, String> {
    find_story(get_stories().await, id)
}
