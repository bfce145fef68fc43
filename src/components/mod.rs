//! Reusable UI components shared across pages.

pub mod theme_toggle;
