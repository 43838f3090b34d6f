//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by data source (`campaigns`, `stories`) plus the toast
//! notifier. `resource` holds the per-request bookkeeping both stores share.

pub mod campaigns;
pub mod resource;
pub mod stories;
pub mod toast;
