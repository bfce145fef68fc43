//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so components depend on small
//! focused models.

pub mod auth;
pub mod ui;
