//! Display decisions for campaign cards and the campaign page.
//!
//! Newsletter templates put logos and header art before the editorial
//! images, so card and hero images are picked by slot with fallbacks.

#[cfg(test)]
#[path = "campaign_view_test.rs"]
mod campaign_view_test;

use chrono::{DateTime, Datelike};

use crate::net::types::{Campaign, CampaignContent, CampaignImage};

/// Image used when a card has nothing usable.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400&h=250&fit=crop";
pub const CONTENT_UNAVAILABLE: &str = "Contenido no disponible";

const CARD_IMAGE_SLOT: usize = 3;
const HERO_IMAGE_SLOTS: [usize; 3] = [2, 1, 0];
const GALLERY_RANGE: std::ops::Range<usize> = 1..5;
const BOILERPLATE: [&str; 2] = ["view email in browser", "update your preferences"];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// How the campaign body is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignBody {
    /// Raw newsletter HTML, rendered in a sandboxed frame.
    Html(String),
    /// Paragraphs of plain text.
    Paragraphs(Vec<String>),
    Unavailable,
}

/// Pick the body representation: HTML, then plain text, then the extracted
/// descriptions, else unavailable.
#[must_use]
pub fn campaign_body(campaign: Option<&Campaign>, content: Option<&CampaignContent>) -> CampaignBody {
    if let Some(html) = content.and_then(|c| c.html.as_ref()) {
        return CampaignBody::Html(html.clone());
    }
    if let Some(text) = content.and_then(|c| c.plain_text.as_deref()) {
        let paragraphs = split_paragraphs(text);
        if !paragraphs.is_empty() {
            return CampaignBody::Paragraphs(paragraphs);
        }
    }
    let descriptions = campaign.map(visible_descriptions).unwrap_or_default();
    if descriptions.is_empty() {
        CampaignBody::Unavailable
    } else {
        CampaignBody::Paragraphs(descriptions)
    }
}

fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Description lines minus newsletter footer boilerplate.
#[must_use]
pub fn visible_descriptions(campaign: &Campaign) -> Vec<String> {
    campaign
        .descriptions
        .iter()
        .filter(|text| {
            let lower = text.to_lowercase();
            !BOILERPLATE.iter().any(|b| lower.contains(b))
        })
        .cloned()
        .collect()
}

/// Card thumbnail URL.
#[must_use]
pub fn card_image(campaign: &Campaign) -> &str {
    campaign
        .images
        .get(CARD_IMAGE_SLOT)
        .or_else(|| campaign.images.last())
        .map_or(CARD_PLACEHOLDER_IMAGE, |img| img.url.as_str())
}

/// Alt text for the card thumbnail.
#[must_use]
pub fn card_alt(campaign: &Campaign) -> &str {
    campaign
        .thumbnail()
        .map(|img| img.alt.as_str())
        .filter(|alt| !alt.is_empty())
        .unwrap_or_else(|| campaign.headline())
}

/// Main image on the campaign page.
#[must_use]
pub fn hero_image(campaign: &Campaign) -> Option<&CampaignImage> {
    HERO_IMAGE_SLOTS.iter().find_map(|&slot| campaign.images.get(slot))
}

/// Secondary images shown under the body.
#[must_use]
pub fn gallery_images(campaign: &Campaign) -> &[CampaignImage] {
    let len = campaign.images.len();
    let start = GALLERY_RANGE.start.min(len);
    let end = GALLERY_RANGE.end.min(len);
    &campaign.images[start..end]
}

/// Send date in long Spanish form, e.g. `1 de mayo de 2024`.
#[must_use]
pub fn format_send_date(send_time: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(send_time).ok()?;
    let month = MONTHS_ES.get(parsed.month0() as usize)?;
    Some(format!("{} de {month} de {}", parsed.day(), parsed.year()))
}
