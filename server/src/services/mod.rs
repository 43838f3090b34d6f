//! Upstream services behind the `/api` routes.
//!
//! ARCHITECTURE
//! ============
//! Each upstream is reached through a trait (`CampaignArchive`,
//! `StoryCatalog`) so route handlers stay focused on HTTP translation and
//! can be tested against in-memory fakes.

pub mod contentful;
pub mod html_extract;
pub mod mailchimp;
