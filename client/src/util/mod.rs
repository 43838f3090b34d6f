//! Pure helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the interaction and formatting rules as plain
//! functions and structs so components stay thin and the rules can be unit
//! tested without a browser.

pub mod campaign_view;
pub mod carousel;
pub mod counter;
pub mod pagination;
pub mod share;
pub mod youtube;
