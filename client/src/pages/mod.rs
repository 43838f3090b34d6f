//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which store actions to run on
//! mount and what to cancel on unmount) and delegates rendering details to
//! `components`.

pub mod campaign;
pub mod landing;
