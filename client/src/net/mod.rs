//! Networking modules for the campaign archive and stories endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and the
//! normalized records, and `fallback` holds the offline stories set.

pub mod api;
pub mod fallback;
pub mod types;
