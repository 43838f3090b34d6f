//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing sections, the blog and the shared dialogs.
//! Those that need server data read the injected stores from Leptos context;
//! the rest are static.

pub mod about;
pub mod blog;
pub mod blog_card;
pub mod contact;
pub mod destinations;
pub mod error_banner;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod properties;
pub mod share_modal;
pub mod social_links;
pub mod stories;
pub mod story_card;
pub mod toast;
