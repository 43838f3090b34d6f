//! Wire types for the campaign and stories endpoints, plus the normalized
//! records the rest of the client works with.
//!
//! DESIGN
//! ======
//! The upstream JSON is loosely shaped: optional fields, settings nested or
//! flattened, descriptions as bare strings or `{text}` objects. Every such
//! fallback is resolved here, once, in the `From<...Wire>` conversions. View
//! code only ever sees `Campaign` and `Story`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Sin título";
pub const NO_SUBJECT: &str = "Sin asunto";
pub const DEFAULT_AUTHOR: &str = "Ruben Alfonso";
pub const UNNAMED_STORY: &str = "Sin nombre";

// =============================================================================
// CAMPAIGNS
// =============================================================================

/// An image referenced by a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// A sent newsletter, displayed as a blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub preview: String,
    pub send_time: Option<String>,
    pub from_name: String,
    pub archive_url: Option<String>,
    pub images: Vec<CampaignImage>,
    pub descriptions: Vec<String>,
}

impl Campaign {
    /// Heading shown on cards and on the detail page.
    ///
    /// Falls back to the internal title when the subject line was never set.
    #[must_use]
    pub fn headline(&self) -> &str {
        if self.subject == NO_SUBJECT && self.title != UNTITLED {
            &self.title
        } else {
            &self.subject
        }
    }

    /// First image, used as the thumbnail and as default alt text source.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&CampaignImage> {
        self.images.first()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CampaignSettingsWire {
    pub subject_line: Option<String>,
    pub preview_text: Option<String>,
    pub title: Option<String>,
    pub from_name: Option<String>,
}

/// A description block: either a bare string or `{ "text": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DescriptionWire {
    Text(String),
    Block {
        #[serde(default)]
        text: Option<String>,
    },
}

impl DescriptionWire {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Block { text } => text.unwrap_or_default(),
        }
    }
}

/// Campaign as the API returns it.
#[derive(Debug, Deserialize)]
pub struct CampaignWire {
    pub id: String,
    #[serde(default)]
    pub settings: Option<CampaignSettingsWire>,
    pub title: Option<String>,
    pub subject_line: Option<String>,
    pub preview_text: Option<String>,
    pub send_time: Option<String>,
    pub from_name: Option<String>,
    pub archive_url: Option<String>,
    pub long_archive_url: Option<String>,
    #[serde(default)]
    pub images: Vec<CampaignImage>,
    #[serde(default)]
    pub descriptions: Vec<DescriptionWire>,
    /// Detail responses only.
    pub html: Option<String>,
    pub plain_text: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CampaignWire> for Campaign {
    fn from(wire: CampaignWire) -> Self {
        let settings = wire.settings.unwrap_or_default();
        let title = non_empty(settings.title)
            .or_else(|| non_empty(wire.title))
            .unwrap_or_else(|| UNTITLED.to_owned());
        let subject = non_empty(settings.subject_line)
            .or_else(|| non_empty(wire.subject_line))
            .unwrap_or_else(|| NO_SUBJECT.to_owned());
        let preview = non_empty(settings.preview_text)
            .or_else(|| non_empty(wire.preview_text))
            .unwrap_or_default();
        let from_name = non_empty(settings.from_name)
            .or_else(|| non_empty(wire.from_name))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned());

        Self {
            id: wire.id,
            title,
            subject,
            preview,
            send_time: non_empty(wire.send_time),
            from_name,
            archive_url: non_empty(wire.long_archive_url).or_else(|| non_empty(wire.archive_url)),
            images: wire
                .images
                .into_iter()
                .filter(|img| !img.url.trim().is_empty())
                .collect(),
            descriptions: wire
                .descriptions
                .into_iter()
                .map(DescriptionWire::into_text)
                .filter(|text| !text.trim().is_empty())
                .collect(),
        }
    }
}

/// Lazily fetched body of a single campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignContent {
    pub html: Option<String>,
    pub plain_text: Option<String>,
}

impl CampaignContent {
    #[must_use]
    pub fn from_wire(wire: &CampaignWire) -> Self {
        Self { html: non_empty(wire.html.clone()), plain_text: non_empty(wire.plain_text.clone()) }
    }
}

/// Engagement report for a campaign. Zeroed when the report is unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignStats {
    #[serde(default)]
    pub opens: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub open_rate: f64,
    #[serde(default)]
    pub click_rate: f64,
    #[serde(default)]
    pub emails_sent: u64,
}

/// `{ success, data: T }` envelope used by every campaign endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: T,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CampaignListWire {
    #[serde(default)]
    pub campaigns: Vec<CampaignWire>,
    #[serde(default)]
    pub total_items: u64,
}

// =============================================================================
// STORIES
// =============================================================================

/// What a story card shows behind the name plate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryMedia {
    Image(String),
    Video(String),
    Placeholder,
}

/// A testimonial entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub name: String,
    pub position_job: Option<String>,
    pub media: StoryMedia,
    pub video_link: Option<String>,
}

/// Story as the API returns it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryWire {
    pub id: Option<String>,
    pub name: Option<String>,
    pub position_job: Option<String>,
    pub background_image: Option<String>,
    pub video: Option<String>,
    pub video_link: Option<String>,
}

impl StoryWire {
    /// Normalize into a `Story`. `index` seeds the id when the record has none.
    #[must_use]
    pub fn into_story(self, index: usize) -> Story {
        // A hosted video wins over the still image when both are present.
        let media = match (non_empty(self.video), non_empty(self.background_image)) {
            (Some(video), _) => StoryMedia::Video(video),
            (None, Some(image)) => StoryMedia::Image(image),
            (None, None) => StoryMedia::Placeholder,
        };
        Story {
            id: non_empty(self.id).unwrap_or_else(|| format!("story-{index}")),
            name: non_empty(self.name).unwrap_or_else(|| UNNAMED_STORY.to_owned()),
            position_job: non_empty(self.position_job),
            media,
            video_link: non_empty(self.video_link),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StoriesWire {
    pub stories: Vec<StoryWire>,
}
